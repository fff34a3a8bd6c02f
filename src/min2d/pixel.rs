//! Plain value types used by the canvas.

/// An 8-bit RGB color. Drawing is always fully opaque.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Normalized RGBA with alpha fixed to 1.
    pub fn to_gl(self) -> [f32; 4] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
            1.0,
        ]
    }

    /// Drops the alpha channel of a pixel read back as RGBA bytes.
    pub fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        Color::rgb(bytes[0], bytes[1], bytes[2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::rgb(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::rgb(red, green, blue)
    }
}

/// A pixel position on the canvas. The origin is the bottom left corner, like OpenGL window
/// coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }

    /// Whether the point lies on a canvas of the given size.
    pub fn is_inside(self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(x, y)
    }
}

/// The part of a `width` x `height` fill at `origin` that lands on the canvas, in the integer
/// form `glScissor` expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScissorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScissorRect {
    /// Clips the fill to the canvas. Returns `None` when nothing would be drawn.
    pub fn clipped(
        origin: Point,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Option<ScissorRect> {
        if width == 0 || height == 0 || !origin.is_inside(canvas_width, canvas_height) {
            return None;
        }
        let width = width.min(canvas_width - origin.x);
        let height = height.min(canvas_height - origin.y);
        Some(ScissorRect {
            x: origin.x as i32,
            y: origin.y as i32,
            width: width as i32,
            height: height as i32,
        })
    }

    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);
        x >= self.x as i64
            && y >= self.y as i64
            && x < self.x as i64 + self.width as i64
            && y < self.y as i64 + self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_color_is_normalized_and_opaque() {
        assert_eq!(Color::WHITE.to_gl(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_gl(), [0.0, 0.0, 0.0, 1.0]);
        let [r, g, b, a] = Color::rgb(51, 102, 0).to_gl();
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn readback_ignores_alpha() {
        assert_eq!(Color::from_rgba_bytes([10, 20, 30, 0]), Color::rgb(10, 20, 30));
    }

    #[test]
    fn fill_inside_canvas_is_unchanged() {
        let rect = ScissorRect::clipped(Point::new(400, 300), 100, 100, 800, 600).unwrap();
        assert_eq!(rect, ScissorRect { x: 400, y: 300, width: 100, height: 100 });
        assert!(rect.contains(Point::new(450, 350)));
        assert!(rect.contains(Point::new(400, 300)));
        assert!(!rect.contains(Point::new(500, 350)));
        assert!(!rect.contains(Point::new(0, 0)));
    }

    #[test]
    fn fill_is_clipped_at_the_edges() {
        let rect = ScissorRect::clipped(Point::new(780, 590), 100, 100, 800, 600).unwrap();
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn empty_or_offscreen_fills_draw_nothing() {
        assert_eq!(ScissorRect::clipped(Point::new(800, 0), 1, 1, 800, 600), None);
        assert_eq!(ScissorRect::clipped(Point::new(0, 600), 1, 1, 800, 600), None);
        assert_eq!(ScissorRect::clipped(Point::new(0, 0), 0, 5, 800, 600), None);
    }

    #[test]
    fn points_convert_from_tuples() {
        let point: Point = (3, 4).into();
        assert_eq!(point, Point::new(3, 4));
        assert!(point.is_inside(4, 5));
        assert!(!point.is_inside(3, 5));
    }
}
