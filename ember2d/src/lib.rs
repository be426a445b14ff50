//! Ember2D - a lightweight 2D game framework.
//!
//! A scene holds game objects (loose or grouped in formations), one
//! collision rule registry, and a background; the engine drives it all
//! from a single per-frame clock.

pub mod engine;
pub mod group;
pub mod input;
pub mod math;
pub mod object;
pub mod physics;
pub mod render;
pub mod scene;

pub use crate::engine::{Engine, EngineConfig, EngineContext, Game, RedrawGate};
pub use crate::group::{Group, GroupDrive, Member};
pub use crate::input::{InputController, InputState, KeyBindings, KeyboardController};
pub use crate::math::{Aabb, Vec2};
pub use crate::object::{
    Behavior, Command, GameObject, GroupAnchor, Lifecycle, ObjectHandle, ObjectState, TickContext,
};
pub use crate::physics::{CollisionEvent, Extent, Physics, PhysicsConfig};
pub use crate::render::{DrawSurface, Frame, Renderer, Sprite, SurfaceFrame, TextureHandle};
pub use crate::scene::{GroupId, Scene};
pub use winit::keyboard::KeyCode;
