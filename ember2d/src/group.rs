use anyhow::Result;

use crate::math::Vec2;
use crate::object::{GameObject, GroupAnchor, TickContext};
use crate::render::DrawSurface;

/// A group member, remembering its formation row and column.
pub struct Member {
    pub object: GameObject,
    pub row: usize,
    pub column: usize,
}

/// Moves a group's anchor once per frame, before members update.
///
/// The drive gets a read view of the member slots so it can react to
/// survivors (e.g. tightening the march as a formation thins out).
pub trait GroupDrive {
    fn update(&mut self, anchor: &mut Vec2, members: &[Option<Member>], ctx: &TickContext<'_>);
}

/// An ordered collection of objects positioned relative to a shared anchor.
///
/// Destroyed members leave a `None` slot behind. Slots are never compacted,
/// so a member's index (and its row/column identity) is stable for the
/// lifetime of the group.
pub struct Group {
    pub anchor: Vec2,
    members: Vec<Option<Member>>,
    drive: Option<Box<dyn GroupDrive>>,
}

impl Group {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            members: Vec::new(),
            drive: None,
        }
    }

    #[must_use]
    pub fn with_drive(mut self, drive: impl GroupDrive + 'static) -> Self {
        self.drive = Some(Box::new(drive));
        self
    }

    /// Add a member at the next slot. Returns the slot index.
    pub fn add_member(&mut self, object: GameObject, row: usize, column: usize) -> usize {
        self.members.push(Some(Member {
            object,
            row,
            column,
        }));
        self.members.len() - 1
    }

    pub fn member(&self, slot: usize) -> Option<&GameObject> {
        self.members
            .get(slot)
            .and_then(|m| m.as_ref())
            .map(|m| &m.object)
    }

    pub fn member_mut(&mut self, slot: usize) -> Option<&mut GameObject> {
        self.members
            .get_mut(slot)
            .and_then(|m| m.as_mut())
            .map(|m| &mut m.object)
    }

    /// Empty a slot, leaving the hole in place.
    pub fn clear_slot(&mut self, slot: usize) {
        if let Some(entry) = self.members.get_mut(slot) {
            *entry = None;
        }
    }

    /// Total slot count, including empty slots.
    pub fn slots(&self) -> usize {
        self.members.len()
    }

    /// Number of members still alive. Destroyed members stop counting
    /// before their slot is swept.
    pub fn live_count(&self) -> usize {
        self.members
            .iter()
            .flatten()
            .filter(|m| m.object.is_active())
            .count()
    }

    pub(crate) fn members(&self) -> &[Option<Member>] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<Option<Member>> {
        &mut self.members
    }

    /// Drive the anchor, then update every occupied slot with anchor info
    /// injected into the context.
    pub fn update(&mut self, ctx: &TickContext<'_>) {
        if let Some(mut drive) = self.drive.take() {
            drive.update(&mut self.anchor, &self.members, ctx);
            self.drive = Some(drive);
        }

        let anchor = self.anchor;
        for member in self.members.iter_mut().flatten() {
            let member_ctx = ctx.with_anchor(GroupAnchor {
                position: anchor,
                row: member.row,
                column: member.column,
            });
            member.object.update(&member_ctx);
        }
    }

    /// Render every occupied slot in order.
    pub fn render(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        for member in self.members.iter().flatten() {
            member.object.render(surface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::math::Aabb;
    use crate::object::{Behavior, ObjectState};
    use std::any::Any;

    struct FollowAnchor;

    impl Behavior for FollowAnchor {
        fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>) {
            if let Some(anchor) = ctx.anchor {
                state.bounds.position = Vec2::new(
                    anchor.position.x + 30.0 * anchor.column as f32,
                    anchor.position.y - 30.0 * anchor.row as f32,
                );
            }
        }

        fn render(&self, _state: &ObjectState, _surface: &mut dyn DrawSurface) -> Result<()> {
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct MarchRight;

    impl GroupDrive for MarchRight {
        fn update(
            &mut self,
            anchor: &mut Vec2,
            _members: &[Option<Member>],
            _ctx: &TickContext<'_>,
        ) {
            anchor.x += 5.0;
        }
    }

    fn member() -> GameObject {
        GameObject::new(Aabb::new(0.0, 0.0, 24.0, 16.0), FollowAnchor)
    }

    #[test]
    fn test_members_derive_position_from_anchor() {
        let mut group = Group::new(Vec2::new(50.0, 200.0)).with_drive(MarchRight);
        group.add_member(member(), 0, 0);
        group.add_member(member(), 1, 2);

        let input = InputState::new();
        let ctx = TickContext::new(&input, 0.016, Vec2::new(640.0, 480.0));
        group.update(&ctx);

        // Drive ran first, so members see the moved anchor.
        assert_eq!(group.anchor, Vec2::new(55.0, 200.0));
        assert_eq!(
            group.member(0).map(|m| m.state.bounds.position),
            Some(Vec2::new(55.0, 200.0))
        );
        assert_eq!(
            group.member(1).map(|m| m.state.bounds.position),
            Some(Vec2::new(115.0, 170.0))
        );
    }

    #[test]
    fn test_cleared_slot_is_skipped_and_stable() {
        let mut group = Group::new(Vec2::ZERO);
        group.add_member(member(), 0, 0);
        group.add_member(member(), 0, 1);
        group.add_member(member(), 0, 2);

        group.clear_slot(1);
        assert_eq!(group.slots(), 3);
        assert_eq!(group.live_count(), 2);
        assert!(group.member(1).is_none());
        // Neighbours keep their indices.
        assert!(group.member(0).is_some());
        assert!(group.member(2).is_some());

        let input = InputState::new();
        let ctx = TickContext::new(&input, 0.016, Vec2::new(640.0, 480.0));
        group.update(&ctx); // must not panic on the hole
    }
}
