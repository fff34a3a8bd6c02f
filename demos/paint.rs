extern crate mini_gl_app;

use mini_gl_app::glutin::event::{MouseButton, VirtualKeyCode};
use mini_gl_app::logging::{init_logging, LoggingConfig};
use mini_gl_app::min2d::{self, Color, Point};
use mini_gl_app::config;

const BRUSH: u32 = 4;

fn main() {
    init_logging(LoggingConfig::default());

    let mut canvas = match min2d::get_fancy(config! {
        window_title: "Paint: left button draws, C clears, Escape quits",
        window_size: (640, 480),
        resizable: true,
    }) {
        Ok(canvas) => canvas,
        Err(err) => {
            log::error!("could not open the paint window: {}", err);
            std::process::exit(1);
        }
    };

    let background = Color::rgb(245, 240, 230);
    let ink = Color::rgb(64, 128, 255);
    let mut needs_clear = true;

    canvas.handle_basic_input(|canvas, input| {
        if needs_clear || input.resized || input.key_pressed(VirtualKeyCode::C) {
            canvas.clear(background);
            needs_clear = false;
        }

        if input.mouse_is_down(MouseButton::Left) {
            let (x, y) = input.mouse_pos;
            let (x, y) = (x.max(0.0) as u32, y.max(0.0) as u32);
            let origin = Point::new(x.saturating_sub(BRUSH / 2), y.saturating_sub(BRUSH / 2));
            canvas.fill_rect(origin, ink, BRUSH, BRUSH);
        }

        !input.key_is_down(VirtualKeyCode::Escape)
    });
}
