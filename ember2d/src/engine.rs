use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::{input::InputState, render::Renderer};

/// Configuration values for the engine window and runtime behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Ember2D Game".into(),
            width: 640,
            height: 480,
            vsync: true,
        }
    }
}

impl EngineConfig {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Frame scheduling gate with cancel-then-reschedule semantics.
///
/// Every tick cancels whatever redraw was pending before scheduling the
/// next one, so running the cycle any number of times leaves exactly one
/// pending frame.
#[derive(Debug, Default)]
pub struct RedrawGate {
    pending: bool,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any pending redraw.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Arm the gate. Returns true if a redraw should actually be requested
    /// (i.e. none was pending yet).
    pub fn schedule(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Consume the pending redraw when it fires.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Main entrypoint for running an Ember2D game.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine instance with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Override the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Override the initial window size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Enable or disable vertical sync.
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    /// Run the provided game until the window is closed or the game
    /// requests exit.
    pub fn run<G: Game + 'static>(self, mut game: G) -> Result<()> {
        let config = self.config;

        let event_loop = EventLoop::new()?;
        let mut window_attributes = Window::default_attributes();
        window_attributes.title = config.title.clone();
        window_attributes.inner_size = Some(LogicalSize::new(config.width, config.height).into());
        let window = event_loop.create_window(window_attributes)?;

        // Leak the window to get a 'static reference. This is fine because
        // the window lives for the entire program duration.
        let window: &'static Window = Box::leak(Box::new(window));

        let mut ctx = EngineContext::new(window, &config)?;
        game.init(&mut ctx)?;

        let mut last_frame = Instant::now();
        event_loop.run(move |event, elwt| {
            match event {
                Event::NewEvents(_) => {
                    ctx.begin_frame();
                }
                Event::WindowEvent { event, .. } => {
                    ctx.handle_window_event(&event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            if is_escape_pressed(&event) {
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(new_size) => {
                            ctx.resize_renderer(new_size);
                        }
                        WindowEvent::RedrawRequested => {
                            ctx.redraw.take();
                            if let Err(err) = game.draw(&mut ctx) {
                                log::error!("Encountered error during draw: {err:?}");
                                elwt.exit();
                                return;
                            }

                            if ctx.exit_requested {
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    ctx.update_time(now - last_frame);
                    last_frame = now;

                    if let Err(err) = game.update(&mut ctx) {
                        log::error!("Encountered error during update: {err:?}");
                        elwt.exit();
                        return;
                    }

                    if ctx.exit_requested {
                        elwt.exit();
                        return;
                    }

                    // Cancel-then-reschedule keeps exactly one frame pending
                    // no matter how often the tick runs.
                    ctx.redraw.cancel();
                    if ctx.redraw.schedule() {
                        ctx.window.request_redraw();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_escape_pressed(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed
        && matches!(event.physical_key, PhysicalKey::Code(KeyCode::Escape))
}

/// Shared context provided to game code each frame.
pub struct EngineContext<'window> {
    window: &'window winit::window::Window,
    delta_time: Duration,
    elapsed_time: Duration,
    exit_requested: bool,
    input: InputState,
    renderer: Renderer<'window>,
    redraw: RedrawGate,
}

impl<'window> EngineContext<'window> {
    fn new(window: &'window winit::window::Window, config: &EngineConfig) -> Result<Self> {
        let renderer = Renderer::new(window, config.vsync)?;

        Ok(Self {
            window,
            delta_time: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            exit_requested: false,
            input: InputState::new(),
            renderer,
            redraw: RedrawGate::new(),
        })
    }

    fn begin_frame(&mut self) {
        self.input.begin_frame();
    }

    fn update_time(&mut self, delta: Duration) {
        self.delta_time = delta;
        self.elapsed_time += delta;
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            self.input.handle_key(event);
        }
    }

    fn resize_renderer(&mut self, new_size: PhysicalSize<u32>) {
        self.renderer.resize(new_size);
    }

    /// Duration between the current and previous frames.
    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    /// Frame delta in seconds, the unit game code works in.
    pub fn delta_seconds(&self) -> f32 {
        self.delta_time.as_secs_f32()
    }

    /// Total time elapsed since the engine started running.
    pub fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }

    /// Access the underlying winit window.
    pub fn window(&self) -> &winit::window::Window {
        self.window
    }

    /// Access the current input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Request that the engine exit after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Access the renderer for drawing operations.
    pub fn renderer(&mut self) -> &mut Renderer<'window> {
        &mut self.renderer
    }

    /// Load a texture from encoded image bytes (convenience method).
    pub fn load_texture_from_bytes(
        &mut self,
        bytes: &[u8],
    ) -> Result<crate::render::TextureHandle> {
        self.renderer.load_texture_from_bytes(bytes)
    }
}

/// Trait implemented by user code to hook into the engine lifecycle.
pub trait Game {
    /// Called once after the window is created but before the first frame.
    fn init(&mut self, _ctx: &mut EngineContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Update game state. Called once per frame before drawing.
    fn update(&mut self, ctx: &mut EngineContext<'_>) -> Result<()>;

    /// Draw the current frame. Called after update when a redraw is
    /// requested.
    fn draw(&mut self, ctx: &mut EngineContext<'_>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_gate_cancel_then_reschedule_is_idempotent() {
        let mut gate = RedrawGate::new();

        gate.cancel();
        assert!(gate.schedule());
        gate.cancel();
        assert!(gate.schedule());
        // Exactly one frame pending after any number of cycles.
        assert!(gate.is_pending());
        assert!(!gate.schedule());

        assert!(gate.take());
        assert!(!gate.take());
    }

    #[test]
    fn test_engine_config_json_round_trip() {
        let config = EngineConfig {
            title: "Invaders".into(),
            width: 640,
            height: 480,
            vsync: false,
        };
        let json = config.to_json().unwrap();
        let parsed = EngineConfig::from_json(&json).unwrap();
        assert_eq!(parsed.title, "Invaders");
        assert_eq!((parsed.width, parsed.height), (640, 480));
        assert!(!parsed.vsync);
    }
}
