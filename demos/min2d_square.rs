extern crate mini_gl_app;

use mini_gl_app::logging::{init_logging, LoggingConfig};
use mini_gl_app::min2d::{self, Color, Point};

fn main() {
    init_logging(LoggingConfig::default());

    let mut canvas = match min2d::init(800, 600, "windowTitle", false) {
        Ok(canvas) => canvas,
        Err(err) => {
            log::error!("could not open the canvas window: {}", err);
            std::process::exit(1);
        }
    };

    canvas.clear(Color::WHITE);
    if let Some(color) = canvas.get_pixel(Point::new(20, 30)) {
        println!("{} {} {}", color.red, color.green, color.blue);
    }

    while canvas.is_running() {
        canvas.clear(Color::WHITE);
        canvas.fill_rect(Point::new(400, 300), Color::BLACK, 100, 100);
        canvas.refresh();
    }

    canvas.shutdown();
}
