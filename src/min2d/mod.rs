//! A tiny immediate mode pixel canvas.
//!
//! ```no_run
//! use mini_gl_app::min2d::{self, Color, Point};
//!
//! let mut canvas = min2d::init(800, 600, "Pixels", false).unwrap();
//! while canvas.is_running() {
//!     canvas.clear(Color::WHITE);
//!     canvas.fill_rect(Point::new(400, 300), Color::BLACK, 100, 100);
//!     canvas.refresh();
//! }
//! ```

mod breakout;
mod canvas;
mod pixel;

pub use self::breakout::GlutinBreakout;
pub use self::canvas::Canvas;
pub use self::pixel::{Color, Point, ScissorRect};

use glutin::dpi::PhysicalSize;
use glutin::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::run_return::EventLoopExtRunReturn;
use glutin::{PossiblyCurrent, WindowedContext};

use crate::config::Config;
use crate::error::InitError;
use crate::input::{dispatch, BasicInput, InputHandler};
use crate::window::{init_gl_context, keep_polling};

const DEFAULT_SIZE: PhysicalSize<u32> = PhysicalSize {
    width: 800,
    height: 600,
};

/// Opens a `width` x `height` window ready for drawing.
///
/// With `fullscreen` the window covers the primary monitor instead; the canvas still starts out
/// at the requested size until the first resize event arrives.
pub fn init<S: ToString>(
    width: u32,
    height: u32,
    title: S,
    fullscreen: bool,
) -> Result<Min2D, InitError> {
    get_fancy(crate::config! {
        window_title: title.to_string(),
        window_size: (width, height),
        fullscreen: fullscreen,
    })
}

/// Opens a canvas window from a full [`Config`].
pub fn get_fancy(config: Config) -> Result<Min2D, InitError> {
    let event_loop = EventLoop::new();
    let size = config.size_or(DEFAULT_SIZE);
    let config = Config {
        depth_bits: 0,
        ..config
    };
    let context = init_gl_context(&config, &event_loop, size)?;
    let canvas = Canvas::new(size.width, size.height)?;

    Ok(Min2D {
        canvas,
        context,
        event_loop,
    })
}

/// Owns the window, its context and the [`Canvas`] drawing into it.
///
/// Dropping a `Min2D` (or calling [`shutdown`][Min2D::shutdown]) releases the GL objects and then
/// closes the window.
#[derive(Debug)]
pub struct Min2D {
    // Field order is drop order: the canvas frees GL objects while the context still exists.
    pub canvas: Canvas,
    pub context: WindowedContext<PossiblyCurrent>,
    pub event_loop: EventLoop<()>,
}

impl Min2D {
    pub fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    pub fn put_pixel<P: Into<Point>>(&mut self, point: P, color: Color) {
        self.canvas.put_pixel(point.into(), color);
    }

    pub fn fill_rect<P: Into<Point>>(&mut self, point: P, color: Color, width: u32, height: u32) {
        self.canvas.fill_rect(point.into(), color, width, height);
    }

    pub fn get_pixel<P: Into<Point>>(&self, point: P) -> Option<Color> {
        self.canvas.get_pixel(point.into())
    }

    pub fn size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    /// Presents the frame. Events are not processed; see [`is_running`][Min2D::is_running].
    pub fn refresh(&mut self) {
        if let Err(err) = self.context.swap_buffers() {
            log::error!("failed to swap buffers: {}", err);
        }
    }

    /// Drains pending window events once.
    ///
    /// Returns `false` once the window was asked to close or Escape was pressed. Resizes are
    /// applied to the canvas before returning.
    pub fn is_running(&mut self) -> bool {
        let mut events = WindowEvents::new();
        self.event_loop.run_return(|event, _, flow| {
            keep_polling(flow);
            match event {
                Event::WindowEvent { event, .. } => dispatch(&mut events, &event),
                Event::MainEventsCleared => *flow = ControlFlow::Exit,
                _ => {}
            }
        });
        if let Some((width, height)) = events.resized {
            self.resize(PhysicalSize::new(width, height));
        }
        events.running
    }

    /// Runs `handler` once per frame until it returns `false` or the window is closed.
    ///
    /// The canvas is presented after every call, so the handler only has to draw.
    ///
    /// ```no_run
    /// use mini_gl_app::glutin::event::{MouseButton, VirtualKeyCode};
    /// use mini_gl_app::min2d::{self, Color, Point};
    ///
    /// let mut canvas = min2d::init(640, 480, "Paint", false).unwrap();
    /// canvas.clear(Color::WHITE);
    /// canvas.handle_basic_input(|canvas, input| {
    ///     if input.mouse_is_down(MouseButton::Left) {
    ///         let (x, y) = input.mouse_pos;
    ///         canvas.fill_rect(Point::new(x as u32, y as u32), Color::BLACK, 3, 3);
    ///     }
    ///     !input.key_is_down(VirtualKeyCode::Escape)
    /// });
    /// ```
    pub fn handle_basic_input<F: FnMut(&mut Canvas, &BasicInput) -> bool>(&mut self, mut handler: F) {
        let mut input = BasicInput::new(self.canvas.height());
        let canvas = &mut self.canvas;
        let context = &self.context;

        self.event_loop.run_return(|event, _, flow| {
            keep_polling(flow);
            match event {
                Event::NewEvents(_) => input.advance(),
                Event::WindowEvent { event, .. } => {
                    if let WindowEvent::Resized(size) = &event {
                        context.resize(*size);
                        canvas.resize_viewport(size.width, size.height);
                    }
                    if let WindowEvent::CloseRequested = &event {
                        *flow = ControlFlow::Exit;
                        return;
                    }
                    dispatch(&mut input, &event);
                }
                Event::MainEventsCleared => {
                    if !handler(canvas, &input) {
                        *flow = ControlFlow::Exit;
                        return;
                    }
                    if let Err(err) = context.swap_buffers() {
                        log::error!("failed to swap buffers: {}", err);
                    }
                }
                _ => {}
            }
        });
    }

    /// Closes the window and releases everything.
    pub fn shutdown(self) {
        log::info!("shutting down canvas window");
    }

    /// Gives up the convenience methods for direct access to the context and canvas.
    pub fn glutin_breakout(self) -> (EventLoop<()>, GlutinBreakout) {
        let Min2D {
            canvas,
            context,
            event_loop,
        } = self;
        (event_loop, GlutinBreakout { canvas, context })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
        self.canvas.resize_viewport(size.width, size.height);
    }
}

/// What one [`Min2D::is_running`] pass saw.
#[derive(Debug, Clone, PartialEq)]
struct WindowEvents {
    running: bool,
    /// Last size reported in the pass.
    resized: Option<(u32, u32)>,
}

impl WindowEvents {
    fn new() -> Self {
        WindowEvents {
            running: true,
            resized: None,
        }
    }
}

impl InputHandler for WindowEvents {
    fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        if key == VirtualKeyCode::Escape && state == ElementState::Pressed {
            self.running = false;
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.resized = Some((width, height));
    }

    fn on_close_requested(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_quiet_pass_keeps_running() {
        let events = WindowEvents::new();
        assert!(events.running);
        assert_eq!(events.resized, None);
    }

    #[test]
    fn escape_stops_on_press_only() {
        let mut events = WindowEvents::new();
        events.on_key(VirtualKeyCode::Escape, ElementState::Released);
        assert!(events.running);
        events.on_key(VirtualKeyCode::Space, ElementState::Pressed);
        assert!(events.running);
        events.on_key(VirtualKeyCode::Escape, ElementState::Pressed);
        assert!(!events.running);
    }

    #[test]
    fn close_request_stops() {
        let mut events = WindowEvents::new();
        events.on_close_requested();
        assert!(!events.running);
    }

    #[test]
    fn resize_keeps_the_latest_size() {
        let mut events = WindowEvents::new();
        events.on_resize(1024, 768);
        events.on_resize(640, 480);
        assert_eq!(events.resized, Some((640, 480)));
        assert!(events.running);
    }
}
