use anyhow::Result;

use crate::group::Group;
use crate::input::InputState;
use crate::math::{Aabb, Vec2};
use crate::object::{GameObject, ObjectHandle, TickContext};
use crate::physics::{CollisionEvent, Physics};
use crate::render::DrawSurface;

/// Identity of a group owned by a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupId(pub(crate) usize);

/// A flat list of loose objects, a list of groups, and one collision
/// registry.
///
/// Ownership is exclusive: an object lives either in the loose list or
/// inside a group, never both. Destroyed objects are swept to `None` slots
/// at the end of every update; slot indices stay stable.
pub struct Scene {
    background: [f32; 4],
    objects: Vec<Option<GameObject>>,
    groups: Vec<Group>,
    physics: Physics,
    collisions: Vec<CollisionEvent>,
}

impl Scene {
    pub fn new(physics: Physics) -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            objects: Vec::new(),
            groups: Vec::new(),
            physics,
            collisions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: [f32; 4]) -> Self {
        self.background = color;
        self
    }

    /// Add a loose object. Returns its handle.
    pub fn add_object(&mut self, object: GameObject) -> ObjectHandle {
        self.objects.push(Some(object));
        ObjectHandle::Loose(self.objects.len() - 1)
    }

    /// Take ownership of a group. Returns its id.
    pub fn add_group(&mut self, group: Group) -> GroupId {
        self.groups.push(group);
        GroupId(self.groups.len() - 1)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id.0)
    }

    /// Handles of every currently occupied slot in a group.
    pub fn member_handles(&self, id: GroupId) -> Vec<ObjectHandle> {
        let Some(group) = self.groups.get(id.0) else {
            return Vec::new();
        };
        (0..group.slots())
            .filter(|&slot| group.member(slot).is_some())
            .map(|slot| ObjectHandle::Member { group: id.0, slot })
            .collect()
    }

    /// Register a pair rule between two handles.
    pub fn on_collide(&mut self, subject: ObjectHandle, other: ObjectHandle) {
        self.physics.on_collide(subject, other);
    }

    /// Register a wall rule for a handle.
    pub fn on_collide_walls(&mut self, subject: ObjectHandle) {
        self.physics.on_collide_walls(subject);
    }

    /// Register a pair rule against every current member of a group.
    ///
    /// The expansion happens now: members added to the group afterwards are
    /// not covered.
    pub fn on_collide_group(&mut self, subject: ObjectHandle, group: GroupId) {
        for other in self.member_handles(group) {
            self.physics.on_collide(subject, other);
        }
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&GameObject> {
        match handle {
            ObjectHandle::Loose(index) => self.objects.get(index).and_then(|o| o.as_ref()),
            ObjectHandle::Member { group, slot } => {
                self.groups.get(group).and_then(|g| g.member(slot))
            }
        }
    }

    pub fn object_mut(&mut self, handle: ObjectHandle) -> Option<&mut GameObject> {
        match handle {
            ObjectHandle::Loose(index) => self.objects.get_mut(index).and_then(|o| o.as_mut()),
            ObjectHandle::Member { group, slot } => {
                self.groups.get_mut(group).and_then(|g| g.member_mut(slot))
            }
        }
    }

    /// Mark an object destroyed. Physics stops seeing it immediately; the
    /// slot empties at the end of the current update.
    pub fn destroy(&mut self, handle: ObjectHandle) {
        if let Some(object) = self.object_mut(handle) {
            object.destroy();
        }
    }

    /// Run one frame: loose objects, then groups, then physics, then the
    /// destroy sweep.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let playfield = self.physics.config().bounds;
        let ctx = TickContext::new(input, dt, playfield);

        for object in self.objects.iter_mut().flatten() {
            object.update(&ctx);
        }
        for group in &mut self.groups {
            group.update(&ctx);
        }

        let objects = &self.objects;
        let groups = &self.groups;
        self.physics.evaluate(|handle| {
            let object = match handle {
                ObjectHandle::Loose(index) => objects.get(index).and_then(|o| o.as_ref()),
                ObjectHandle::Member { group, slot } => {
                    groups.get(group).and_then(|g| g.member(slot))
                }
            }?;
            object.is_active().then_some(object.state.bounds)
        });
        self.collisions.extend(self.physics.drain_events());

        self.sweep_destroyed();
    }

    fn sweep_destroyed(&mut self) {
        for slot in &mut self.objects {
            if matches!(slot, Some(object) if !object.is_active()) {
                *slot = None;
            }
        }
        for group in &mut self.groups {
            for slot in group.members_mut() {
                if matches!(slot, Some(member) if !member.object.is_active()) {
                    *slot = None;
                }
            }
        }
    }

    /// Take the collision events collected by the last update(s).
    pub fn drain_collisions(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.collisions)
    }

    /// Playfield bounds from the physics configuration.
    pub fn playfield(&self) -> Vec2 {
        self.physics.config().bounds
    }

    pub fn bounds_of(&self, handle: ObjectHandle) -> Option<Aabb> {
        self.object(handle).map(|o| o.state.bounds)
    }

    /// Draw one frame: background clear first, always, then loose objects,
    /// then groups, in insertion order.
    pub fn render(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        surface.clear(self.background)?;
        for object in self.objects.iter().flatten() {
            object.render(surface)?;
        }
        for group in &self.groups {
            group.render(surface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Behavior, Command, ObjectState};
    use crate::physics::PhysicsConfig;
    use crate::render::Sprite;
    use std::any::Any;

    struct Still;

    impl Behavior for Still {
        fn update(&mut self, _state: &mut ObjectState, _ctx: &TickContext<'_>) {}

        fn render(&self, state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()> {
            surface.fill_rect(state.bounds, [1.0, 1.0, 1.0, 1.0])
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// Records draw calls so ordering properties can be asserted.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, _color: [f32; 4]) -> Result<()> {
            self.calls.push("clear".into());
            Ok(())
        }

        fn fill_rect(&mut self, _rect: Aabb, _color: [f32; 4]) -> Result<()> {
            self.calls.push("fill_rect".into());
            Ok(())
        }

        fn draw_sprite(&mut self, _sprite: &Sprite) -> Result<()> {
            self.calls.push("draw_sprite".into());
            Ok(())
        }

        fn draw_text(
            &mut self,
            _text: &str,
            _position: Vec2,
            _scale: f32,
            _color: [f32; 4],
        ) -> Result<()> {
            self.calls.push("draw_text".into());
            Ok(())
        }

        fn size(&self) -> Vec2 {
            Vec2::new(640.0, 480.0)
        }
    }

    fn scene() -> Scene {
        Scene::new(Physics::new(PhysicsConfig::new(Vec2::new(640.0, 480.0))))
    }

    fn object(x: f32, y: f32, w: f32, h: f32) -> GameObject {
        GameObject::new(Aabb::new(x, y, w, h), Still)
    }

    #[test]
    fn test_background_clears_before_entities() {
        let mut scene = scene();
        scene.add_object(object(10.0, 10.0, 8.0, 8.0));
        let mut group = Group::new(Vec2::ZERO);
        group.add_member(object(0.0, 0.0, 8.0, 8.0), 0, 0);
        scene.add_group(group);

        let mut surface = RecordingSurface::default();
        scene.render(&mut surface).unwrap();
        assert_eq!(surface.calls, vec!["clear", "fill_rect", "fill_rect"]);
    }

    #[test]
    fn test_destroy_sweeps_after_update() {
        let mut scene = scene();
        let handle = scene.add_object(object(10.0, 10.0, 8.0, 8.0));
        scene.destroy(handle);
        assert!(scene.object(handle).is_none());

        let input = InputState::new();
        scene.update(&input, 0.016);
        // Slot is emptied, not reused; a fresh add gets a new index.
        let fresh = scene.add_object(object(0.0, 0.0, 8.0, 8.0));
        assert_ne!(handle, fresh);
    }

    #[test]
    fn test_pair_event_via_scene_update() {
        let mut scene = scene();
        let laser = scene.add_object(object(116.0, 430.0, 3.0, 10.0));
        let mut group = Group::new(Vec2::ZERO);
        group.add_member(object(110.0, 420.0, 24.0, 16.0), 0, 0);
        let formation = scene.add_group(group);
        scene.on_collide_group(laser, formation);

        let input = InputState::new();
        scene.update(&input, 0.016);
        let events = scene.drain_collisions();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].subject, laser);
        assert_eq!(
            events[0].other,
            Some(ObjectHandle::Member {
                group: 0,
                slot: 0
            })
        );
    }

    #[test]
    fn test_destroyed_member_stops_colliding() {
        let mut scene = scene();
        let laser = scene.add_object(object(116.0, 430.0, 3.0, 10.0));
        let mut group = Group::new(Vec2::ZERO);
        group.add_member(object(110.0, 420.0, 24.0, 16.0), 0, 0);
        let formation = scene.add_group(group);
        scene.on_collide_group(laser, formation);
        let target = scene.member_handles(formation)[0];

        let input = InputState::new();
        scene.update(&input, 0.016);
        assert_eq!(scene.drain_collisions().len(), 1);

        scene.destroy(target);
        scene.update(&input, 0.016);
        assert!(scene.drain_collisions().is_empty());
    }

    #[test]
    fn test_member_command_slot_reachable_by_handle() {
        let mut scene = scene();
        let mut group = Group::new(Vec2::ZERO);
        group.add_member(object(0.0, 0.0, 8.0, 8.0), 0, 0);
        let id = scene.add_group(group);
        let handle = scene.member_handles(id)[0];

        scene.object_mut(handle).unwrap().state.command = Command::Fire;
        assert_eq!(scene.object(handle).unwrap().state.command, Command::Fire);
    }
}
