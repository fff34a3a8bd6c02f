//! Small OpenGL application scaffold.
//!
//! Powered by OpenGL. The context is provided by glutin, which is re-exported along with `gl` so
//! you can reach the native types when the wrappers don't cover something.
//!
//! Three pieces, usable on their own:
//!
//! - [`Application`]: a window with a frame loop, a fly-through [`Camera`] wired to W/A/S/D,
//!   the mouse and the scroll wheel, and two hooks ([`AppHooks`]) for your code.
//! - [`Shader`]: compiles and links a vertex + fragment program and sets uniforms on it.
//! - [`min2d`]: an immediate mode pixel canvas with `clear`, `put_pixel`, `fill_rect`,
//!   `get_pixel` and `refresh`.
//!
//! Setup failures come back as [`InitError`] rather than ending the process.
//!
//! ```no_run
//! use mini_gl_app::min2d::{self, Color, Point};
//!
//! let mut canvas = min2d::init(800, 600, "Hello world!", false).unwrap();
//! while canvas.is_running() {
//!     canvas.clear(Color::WHITE);
//!     canvas.put_pixel(Point::new(20, 30), Color::rgb(255, 0, 0));
//!     canvas.refresh();
//! }
//! ```

#[macro_use]
extern crate rustic_gl;
#[macro_use]
extern crate derive_builder;

pub extern crate gl;
pub extern crate glutin;

#[macro_use]
pub mod config;
pub mod app;
pub mod camera;
pub mod error;
pub mod input;
pub mod logging;
pub mod min2d;
pub mod shader;
pub mod time;
pub mod window;

pub use crate::app::{AppHooks, AppState, Application};
pub use crate::camera::{Camera, CameraMovement};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{InitError, ShaderError, ShaderStage};
pub use crate::input::{BasicInput, CursorTracker, Edge, InputHandler};
pub use crate::min2d::{Canvas, Color, GlutinBreakout, Min2D, Point};
pub use crate::shader::Shader;
pub use crate::time::FrameClock;
