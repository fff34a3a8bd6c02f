//! Draw-then-read checks against a real GL context.
//!
//! These need a display and a GL 3.3 driver, so they are ignored by default:
//! `cargo test -- --ignored --test-threads=1`. The event loop has to be created on the main
//! thread on some platforms, which is why everything lives in a single test.

extern crate mini_gl_app;

use mini_gl_app::min2d::{self, Color, Point};
use mini_gl_app::{config, Shader, ShaderError};

#[test]
#[ignore]
fn canvas_round_trips_through_the_framebuffer() {
    let mut canvas = min2d::get_fancy(config! {
        window_title: "min2d readback",
        window_size: (800, 600),
        resizable: false,
        vsync: false,
    })
    .expect("a GL 3.3 capable display");
    let (width, height) = canvas.size();
    assert_eq!((width, height), (800, 600));

    // Clear, then read anywhere
    for &color in &[Color::WHITE, Color::BLACK, Color::rgb(12, 200, 77)] {
        canvas.clear(color);
        for &point in &[Point::new(0, 0), Point::new(20, 30), Point::new(799, 599)] {
            assert_eq!(canvas.get_pixel(point), Some(color));
        }
    }

    // A filled square only touches its own rectangle
    canvas.clear(Color::WHITE);
    canvas.fill_rect(Point::new(400, 300), Color::BLACK, 100, 100);
    assert_eq!(canvas.get_pixel(Point::new(450, 350)), Some(Color::BLACK));
    assert_eq!(canvas.get_pixel(Point::new(400, 300)), Some(Color::BLACK));
    assert_eq!(canvas.get_pixel(Point::new(499, 399)), Some(Color::BLACK));
    assert_eq!(canvas.get_pixel(Point::new(500, 350)), Some(Color::WHITE));
    assert_eq!(canvas.get_pixel(Point::new(0, 0)), Some(Color::WHITE));

    // Single pixels and clipping at the edge
    canvas.put_pixel(Point::new(10, 10), Color::rgb(255, 0, 0));
    assert_eq!(canvas.get_pixel(Point::new(10, 10)), Some(Color::rgb(255, 0, 0)));
    assert_eq!(canvas.get_pixel(Point::new(11, 10)), Some(Color::WHITE));
    canvas.fill_rect(Point::new(790, 590), Color::rgb(0, 0, 255), 100, 100);
    assert_eq!(canvas.get_pixel(Point::new(799, 599)), Some(Color::rgb(0, 0, 255)));

    assert_eq!(canvas.get_pixel(Point::new(800, 0)), None);

    // Shader failures come back as errors while the context stays usable
    let err = Shader::from_source("#version 330 core\nvoid main() {", "").unwrap_err();
    assert!(matches!(err, ShaderError::Compile { .. }));

    // Both stages compile, but the fragment input has no vertex output to link to
    let err = Shader::from_source(
        "#version 330 core\nvoid main() { gl_Position = vec4(0.0); }\n",
        "#version 330 core\nin vec3 v_normal;\nout vec4 color;\n\
         void main() { color = vec4(v_normal, 1.0); }\n",
    )
    .unwrap_err();
    assert!(matches!(err, ShaderError::Link { .. }));

    canvas.clear(Color::BLACK);
    assert_eq!(canvas.get_pixel(Point::new(1, 1)), Some(Color::BLACK));

    canvas.refresh();
    canvas.shutdown();
}
