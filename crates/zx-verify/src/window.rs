//! Windowed display (winit + pixels), refreshed at 50 Hz.

use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use sinclair_screen::{Frame, MAX_SCALE, MemoryScreen, SCREEN_HEIGHT, SCREEN_WIDTH};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::VerifyError;
use crate::demo::Demo;
use crate::sink::DisplaySink;

/// Frame duration for 50 Hz PAL.
const FRAME_DURATION: Duration = Duration::from_micros(20_000);

/// Presents frames on a pixels surface. The surface is 256x192; the window
/// size does the scaling.
pub struct WindowSink {
    pixels: Pixels<'static>,
}

impl WindowSink {
    /// Attach a 256x192 surface to `window`.
    pub fn new(window: &'static Window) -> Result<Self, VerifyError> {
        let inner = window.inner_size();
        let surface = SurfaceTexture::new(inner.width, inner.height, window);
        let pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface)
            .map_err(|e| VerifyError::Window(format!("failed to create pixels: {e}")))?;
        Ok(Self { pixels })
    }
}

impl DisplaySink for WindowSink {
    fn present(&mut self, frame: &Frame) -> Result<(), VerifyError> {
        self.pixels.frame_mut().copy_from_slice(frame.as_bytes());
        self.pixels
            .render()
            .map_err(|e| VerifyError::Window(format!("render error: {e}")))
    }
}

struct Viewer {
    screen: MemoryScreen,
    demo: Option<Demo>,
    step: u32,
    scale: u32,
    window: Option<&'static Window>,
    sink: Option<WindowSink>,
    last_frame_time: Instant,
    error: Option<VerifyError>,
}

impl Viewer {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: VerifyError) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn next_frame(&mut self) -> Result<(), VerifyError> {
        if let Some(demo) = self.demo {
            demo.draw(&mut self.screen, self.step);
            self.step = self.step.wrapping_add(1);
        }
        let frame = self.screen.render();
        match self.sink.as_mut() {
            Some(sink) => sink.present(frame),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = match self.demo {
            Some(demo) => format!("zx-verify: {demo}"),
            None => "zx-verify".to_string(),
        };
        let window_size =
            winit::dpi::LogicalSize::new(SCREEN_WIDTH * self.scale, SCREEN_HEIGHT * self.scale);
        let attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(window_size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                // Lives until process exit.
                let window: &'static Window = Box::leak(Box::new(window));
                match WindowSink::new(window) {
                    Ok(sink) => self.sink = Some(sink),
                    Err(e) => {
                        self.fail(event_loop, e);
                        return;
                    }
                }
                self.window = Some(window);
            }
            Err(e) => {
                self.fail(
                    event_loop,
                    VerifyError::Window(format!("failed to create window: {e}")),
                );
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if now.duration_since(self.last_frame_time) >= FRAME_DURATION {
                    if let Err(e) = self.next_frame() {
                        self.fail(event_loop, e);
                        return;
                    }
                    self.last_frame_time = now;
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window {
            window.request_redraw();
        }
    }
}

/// Show `screen` in a window until it is closed or Escape is pressed. With a
/// demo, the scene is redrawn each frame; otherwise the screen is shown as
/// is (FLASH still animates). Returns the screen as it was at exit.
///
/// # Errors
///
/// Returns [`VerifyError::Window`] if the event loop, window or surface
/// cannot be created, or rendering fails.
pub fn run_window(
    screen: MemoryScreen,
    demo: Option<Demo>,
    scale: u32,
) -> Result<MemoryScreen, VerifyError> {
    let event_loop = EventLoop::new()
        .map_err(|e| VerifyError::Window(format!("failed to create event loop: {e}")))?;

    let mut viewer = Viewer {
        screen,
        demo,
        step: 0,
        scale: scale.clamp(1, MAX_SCALE),
        window: None,
        sink: None,
        last_frame_time: Instant::now(),
        error: None,
    };
    event_loop
        .run_app(&mut viewer)
        .map_err(|e| VerifyError::Window(format!("event loop error: {e}")))?;

    match viewer.error {
        Some(e) => Err(e),
        None => Ok(viewer.screen),
    }
}
