use crate::math::{Aabb, Vec2};
use crate::object::ObjectHandle;

/// Which surface extent bounds the x coordinate in the playfield check.
///
/// `Width` is the sensible default. `Height` exists because some playfields
/// were historically clipped against the wrong axis and games may depend on
/// that envelope; it keeps the quirk reachable and testable instead of
/// hard-coded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extent {
    #[default]
    Width,
    Height,
}

/// Playfield configuration injected into the collision registry.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
    pub bounds: Vec2,
    pub x_extent: Extent,
}

impl PhysicsConfig {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bounds,
            x_extent: Extent::Width,
        }
    }

    #[must_use]
    pub fn with_x_extent(mut self, x_extent: Extent) -> Self {
        self.x_extent = x_extent;
        self
    }

    /// Inclusive playfield membership for an object origin.
    pub fn in_playfield(&self, point: Vec2) -> bool {
        let x_max = match self.x_extent {
            Extent::Width => self.bounds.x,
            Extent::Height => self.bounds.y,
        };
        point.x >= 0.0 && point.x <= x_max && point.y >= 0.0 && point.y <= self.bounds.y
    }
}

/// A collision that fired this frame. `other` is `None` for wall hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub subject: ObjectHandle,
    pub other: Option<ObjectHandle>,
}

/// Registry of pair and wall rules, evaluated once per scene update.
///
/// Rules are checked by handle; a rule whose handle no longer resolves to a
/// live object is skipped, and a rule whose predicate holds fires every
/// frame it keeps holding. There is no de-duplication.
pub struct Physics {
    config: PhysicsConfig,
    pair_rules: Vec<(ObjectHandle, ObjectHandle)>,
    wall_rules: Vec<ObjectHandle>,
    pending_events: Vec<CollisionEvent>,
}

impl Physics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            pair_rules: Vec::new(),
            wall_rules: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Register a pair rule: fires when `subject`'s origin enters `other`'s
    /// bounds while both origins are inside the playfield.
    pub fn on_collide(&mut self, subject: ObjectHandle, other: ObjectHandle) {
        self.pair_rules.push((subject, other));
    }

    /// Register a wall rule: fires when `subject` leaves the playfield.
    pub fn on_collide_walls(&mut self, subject: ObjectHandle) {
        self.wall_rules.push(subject);
    }

    /// Evaluate every rule against current bounds. `bounds_of` returns
    /// `None` for handles that no longer resolve to a live object.
    pub fn evaluate<F>(&mut self, bounds_of: F)
    where
        F: Fn(ObjectHandle) -> Option<Aabb>,
    {
        for &(subject, other) in &self.pair_rules {
            let (Some(a), Some(b)) = (bounds_of(subject), bounds_of(other)) else {
                continue;
            };
            if self.config.in_playfield(a.position)
                && self.config.in_playfield(b.position)
                && b.contains_point(a.position)
            {
                self.pending_events.push(CollisionEvent {
                    subject,
                    other: Some(other),
                });
            }
        }

        for &subject in &self.wall_rules {
            let Some(a) = bounds_of(subject) else {
                continue;
            };
            if hits_wall(a, self.config.bounds) {
                self.pending_events.push(CollisionEvent {
                    subject,
                    other: None,
                });
            }
        }
    }

    /// Take all events collected since the last drain.
    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

fn hits_wall(bounds: Aabb, playfield: Vec2) -> bool {
    let p = bounds.position;
    p.x < bounds.size.x || p.x > playfield.x || p.y < bounds.size.y || p.y > playfield.y
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ObjectHandle = ObjectHandle::Loose(0);
    const B: ObjectHandle = ObjectHandle::Loose(1);

    fn field() -> PhysicsConfig {
        PhysicsConfig::new(Vec2::new(640.0, 480.0))
    }

    fn eval(physics: &mut Physics, a: Aabb, b: Aabb) -> Vec<CollisionEvent> {
        physics.evaluate(|handle| match handle {
            ObjectHandle::Loose(0) => Some(a),
            ObjectHandle::Loose(1) => Some(b),
            _ => None,
        });
        physics.drain_events()
    }

    #[test]
    fn test_pair_fires_on_origin_inside_other() {
        let mut physics = Physics::new(field());
        physics.on_collide(A, B);

        let laser = Aabb::new(116.0, 430.0, 3.0, 10.0);
        let invader = Aabb::new(110.0, 420.0, 24.0, 16.0);
        let events = eval(&mut physics, laser, invader);
        assert_eq!(
            events,
            vec![CollisionEvent {
                subject: A,
                other: Some(B)
            }]
        );
    }

    #[test]
    fn test_pair_fires_at_playfield_origin() {
        // An object sitting at (0, 0) participates: bounds are inclusive.
        let mut physics = Physics::new(field());
        physics.on_collide(A, B);

        let a = Aabb::new(0.0, 0.0, 3.0, 10.0);
        let b = Aabb::new(0.0, 0.0, 24.0, 16.0);
        assert_eq!(eval(&mut physics, a, b).len(), 1);
    }

    #[test]
    fn test_pair_skipped_outside_playfield() {
        let mut physics = Physics::new(field());
        physics.on_collide(A, B);

        // Subject parked above the top edge.
        let a = Aabb::new(116.0, -10.0, 3.0, 10.0);
        let b = Aabb::new(100.0, -20.0, 24.0, 16.0);
        assert!(eval(&mut physics, a, b).is_empty());
    }

    #[test]
    fn test_x_extent_height_narrows_playfield() {
        // With the height extent bounding x, x=500 is outside a 640x480 field.
        let config = field().with_x_extent(Extent::Height);
        assert!(!config.in_playfield(Vec2::new(500.0, 100.0)));
        assert!(config.in_playfield(Vec2::new(480.0, 100.0)));
        assert!(field().in_playfield(Vec2::new(500.0, 100.0)));
    }

    #[test]
    fn test_wall_rule_fires_near_top() {
        let mut physics = Physics::new(field());
        physics.on_collide_walls(A);

        let laser = Aabb::new(100.0, 0.0, 3.0, 5.0);
        physics.evaluate(|_| Some(laser));
        assert_eq!(
            physics.drain_events(),
            vec![CollisionEvent {
                subject: A,
                other: None
            }]
        );
    }

    #[test]
    fn test_rules_refire_every_frame() {
        let mut physics = Physics::new(field());
        physics.on_collide(A, B);

        let a = Aabb::new(116.0, 430.0, 3.0, 10.0);
        let b = Aabb::new(110.0, 420.0, 24.0, 16.0);
        assert_eq!(eval(&mut physics, a, b).len(), 1);
        assert_eq!(eval(&mut physics, a, b).len(), 1);
    }

    #[test]
    fn test_dead_handle_skips_rule() {
        let mut physics = Physics::new(field());
        physics.on_collide(A, B);
        physics.on_collide_walls(A);

        physics.evaluate(|_| None);
        assert!(physics.drain_events().is_empty());
    }
}
