use std::any::Any;

use anyhow::Result;

use crate::input::{InputController, InputState};
use crate::math::{Aabb, Vec2};
use crate::render::DrawSurface;

/// The single command slot every object carries.
///
/// Controllers rewrite it each frame; behaviors consume it afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    None,
    Left,
    Right,
    Fire,
}

/// Explicit lifecycle tag. `Destroyed` objects stop participating in
/// physics immediately and are swept to an empty slot at the end of the
/// scene update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Active,
    Destroyed,
}

/// Data every game object carries: bounds, command slot, lifecycle.
#[derive(Clone, Copy, Debug)]
pub struct ObjectState {
    pub bounds: Aabb,
    pub command: Command,
    pub lifecycle: Lifecycle,
}

impl ObjectState {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            command: Command::None,
            lifecycle: Lifecycle::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }
}

/// Anchor information passed to group members during update.
#[derive(Clone, Copy, Debug)]
pub struct GroupAnchor {
    pub position: Vec2,
    pub row: usize,
    pub column: usize,
}

/// Per-frame inputs handed to behaviors and group drives.
pub struct TickContext<'a> {
    pub input: &'a InputState,
    /// Seconds since the previous frame. The one clock everything runs on.
    pub dt: f32,
    /// Playfield size in pixels.
    pub playfield: Vec2,
    /// Set for group members only.
    pub anchor: Option<GroupAnchor>,
}

impl<'a> TickContext<'a> {
    pub fn new(input: &'a InputState, dt: f32, playfield: Vec2) -> Self {
        Self {
            input,
            dt,
            playfield,
            anchor: None,
        }
    }

    pub(crate) fn with_anchor(&self, anchor: GroupAnchor) -> TickContext<'a> {
        TickContext {
            input: self.input,
            dt: self.dt,
            playfield: self.playfield,
            anchor: Some(anchor),
        }
    }
}

/// Per-kind update and render logic attached to a `GameObject`.
///
/// Behaviors are composed, not inherited: the object owns its state, the
/// behavior decides what to do with it. `as_any` lets game code downcast
/// back to the concrete type when it needs behavior-specific fields.
pub trait Behavior {
    fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>);

    fn render(&self, state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A positioned, sized entity with a command slot, a behavior, and an
/// optional input controller.
pub struct GameObject {
    pub state: ObjectState,
    behavior: Box<dyn Behavior>,
    controller: Option<Box<dyn InputController>>,
}

impl GameObject {
    pub fn new(bounds: Aabb, behavior: impl Behavior + 'static) -> Self {
        Self {
            state: ObjectState::new(bounds),
            behavior: Box::new(behavior),
            controller: None,
        }
    }

    /// Attach an input controller. The controller runs before the behavior
    /// every frame so the behavior sees a fresh command.
    #[must_use]
    pub fn with_controller(mut self, controller: impl InputController + 'static) -> Self {
        self.controller = Some(Box::new(controller));
        self
    }

    pub fn update(&mut self, ctx: &TickContext<'_>) {
        if let Some(controller) = self.controller.as_mut() {
            controller.update(ctx.input, &mut self.state);
        }
        self.behavior.update(&mut self.state, ctx);
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        self.behavior.render(&self.state, surface)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn destroy(&mut self) {
        self.state.lifecycle = Lifecycle::Destroyed;
    }

    /// Downcast the behavior to a concrete type.
    pub fn behavior<T: 'static>(&self) -> Option<&T> {
        self.behavior.as_any().downcast_ref::<T>()
    }

    /// Downcast the behavior to a concrete type, mutably.
    pub fn behavior_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.behavior.as_any_mut().downcast_mut::<T>()
    }
}

/// Copyable identity for an object owned by a scene, used by physics rules
/// and collision events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectHandle {
    /// Index into the scene's loose object list.
    Loose(usize),
    /// Member slot inside a scene-owned group.
    Member { group: usize, slot: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mover;

    impl Behavior for Mover {
        fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>) {
            if state.command == Command::Right {
                state.bounds.position.x += 10.0 * ctx.dt;
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

    struct SlotWriter(Command);

    impl InputController for SlotWriter {
        fn update(&mut self, _input: &InputState, target: &mut ObjectState) {
            target.command = self.0;
        }
    }

    #[test]
    fn test_controller_runs_before_behavior() {
        let mut object = GameObject::new(Aabb::new(0.0, 0.0, 8.0, 8.0), Mover)
            .with_controller(SlotWriter(Command::Right));
        let input = InputState::new();
        let ctx = TickContext::new(&input, 1.0, Vec2::new(640.0, 480.0));

        object.update(&ctx);
        // The command written this frame already moved the object.
        assert_eq!(object.state.bounds.position.x, 10.0);
        assert_eq!(object.state.command, Command::Right);
    }

    #[test]
    fn test_destroy_flags_lifecycle() {
        let mut object = GameObject::new(Aabb::new(0.0, 0.0, 8.0, 8.0), Mover);
        assert!(object.is_active());
        object.destroy();
        assert_eq!(object.state.lifecycle, Lifecycle::Destroyed);
    }

    #[test]
    fn test_behavior_downcast() {
        let object = GameObject::new(Aabb::new(0.0, 0.0, 8.0, 8.0), Mover);
        assert!(object.behavior::<Mover>().is_some());
        assert!(object.behavior::<SlotWriter>().is_none());
    }
}
