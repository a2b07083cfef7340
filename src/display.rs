/*!
Interactive window (feature `display`).

Arrow keys (or Q/A/O/P) scroll the viewport, Shift quadruples the stride,
Escape quits. Each redraw runs one `scroll` call, reconstructs the cache
through the blitter, and presents it via `pixels` (vsync paces the loop, so
one redraw is one frame).
*/

use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::blit::{INK, PAPER, blit_linear, expand_rgba};
use crate::config::ViewportConfig;
use crate::direction::{Direction, Step};
use crate::tiles::TileWorld;
use crate::viewport::Viewport;

#[derive(Copy, Clone, Debug, Default)]
struct HeldKeys {
    right: bool,
    left: bool,
    down: bool,
    up: bool,
    fast: bool,
}

impl HeldKeys {
    fn direction(&self) -> Direction {
        let mut d = Direction::NONE;
        if self.right {
            d = d.with(Step::XPlus);
        }
        if self.left {
            d = d.with(Step::XMinus);
        }
        if self.down {
            d = d.with(Step::YPlus);
        }
        if self.up {
            d = d.with(Step::YMinus);
        }
        d
    }
}

struct App {
    world: TileWorld,
    viewport: Viewport,
    scale: u32,
    stride: u32,
    keys: HeldKeys,
    bits: Vec<u8>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    error: Option<String>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, msg: String) {
        log::error!("{msg}");
        self.error = Some(msg);
        event_loop.exit();
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowRight | KeyCode::KeyP => self.keys.right = pressed,
            KeyCode::ArrowLeft | KeyCode::KeyO => self.keys.left = pressed,
            KeyCode::ArrowDown | KeyCode::KeyA => self.keys.down = pressed,
            KeyCode::ArrowUp | KeyCode::KeyQ => self.keys.up = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.keys.fast = pressed,
            KeyCode::Escape if pressed => event_loop.exit(),
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let stride = if self.keys.fast { self.stride * 4 } else { self.stride };
        let dir = self.keys.direction();
        if self.viewport.scroll(&self.world, dir, stride, stride) {
            log::trace!("camera {:?}", self.viewport.camera());
        }

        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        blit_linear(&self.viewport, &mut self.bits);
        let width_bytes = self.viewport.config().visible_width_bytes;
        expand_rgba(&self.bits, width_bytes, INK, PAPER, pixels.frame_mut());
        if let Err(e) = pixels.render() {
            self.fail(event_loop, format!("render failed: {e}"));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let config = *self.viewport.config();
        let w = config.width_px() as u32;
        let h = config.height_px as u32;

        let attrs = Window::default_attributes()
            .with_title("ringscroll")
            .with_inner_size(LogicalSize::new(w * self.scale, h * self.scale));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, format!("window creation failed: {e}")),
        };

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        match Pixels::new(w, h, surface) {
            Ok(pixels) => self.pixels = Some(pixels),
            Err(e) => return self.fail(event_loop, format!("pixels init failed: {e}")),
        }
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.on_key(event_loop, code, state == ElementState::Pressed),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        self.fail(event_loop, format!("resize failed: {e}"));
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window over `world` and run until closed.
pub fn run(
    world: TileWorld,
    config: ViewportConfig,
    scale: u32,
    stride: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let viewport = Viewport::new(config, &world)?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        world,
        viewport,
        scale: scale.max(1),
        stride: stride.max(1),
        keys: HeldKeys::default(),
        bits: vec![0; config.frame_len()],
        window: None,
        pixels: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(msg) => Err(msg.into()),
        None => Ok(()),
    }
}
