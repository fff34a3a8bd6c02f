use gl::types::*;

use std::mem::size_of_val;

use crate::error::InitError;
use crate::min2d::pixel::{Color, Point, ScissorRect};
use crate::shader::Shader;

type VertexFormat = buffer_layout!([f32; 3]);

/// Two triangles covering the whole viewport.
const QUAD: [[f32; 3]; 6] = [
    [-1., -1., 0.], // bottom left
    [1., -1., 0.],  // bottom right
    [1., 1., 0.],   // top right
    [-1., -1., 0.], // bottom left
    [1., 1., 0.],   // top right
    [-1., 1., 0.],  // top left
];

const COLOR_UNIFORM: &str = "u_color";

/// Provides the drawing functionality.
///
/// Every fill draws the full screen quad in a flat color with the scissor test restricting it to
/// the target rectangle. All methods need the canvas' GL context to be current.
///
/// The quad and shader are released on drop, so a `Canvas` has to be dropped before its context.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    shader: Shader,
    vao: GLuint,
    vbo: GLuint,
}

impl Canvas {
    /// Create the OpenGL resources needed for drawing on a `width` x `height` surface.
    pub fn new(width: u32, height: u32) -> Result<Canvas, InitError> {
        let shader = Shader::from_source(
            include_str!("./flat_vertex_shader.glsl"),
            include_str!("./flat_fragment_shader.glsl"),
        )?;

        let vao = rustic_gl::raw::create_vao().map_err(|err| {
            log::error!("could not create the canvas vertex array: {}", err);
            InitError::Allocation("vertex array")
        })?;
        let vbo = rustic_gl::raw::create_buffer().map_err(|err| {
            log::error!("could not create the canvas vertex buffer: {}", err);
            unsafe { gl::DeleteVertexArrays(1, &vao) };
            InitError::Allocation("vertex buffer")
        })?;

        unsafe {
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                size_of_val(&QUAD) as _,
                QUAD.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            VertexFormat::declare(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);

            gl::Viewport(0, 0, width as _, height as _);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

            // Single pixel reads must not be padded to 4 byte rows
            gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
        }

        shader.use_program();

        Ok(Canvas {
            width,
            height,
            shader,
            vao,
            vbo,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fills the color buffer. There is no depth buffer to clear.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_gl();
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn put_pixel(&mut self, point: Point, color: Color) {
        self.fill_rect(point, color, 1, 1);
    }

    /// Fills `width` x `height` pixels with `point` as the bottom left corner. Anything past the
    /// canvas edge is ignored.
    pub fn fill_rect(&mut self, point: Point, color: Color, width: u32, height: u32) {
        let rect = match ScissorRect::clipped(point, width, height, self.width, self.height) {
            Some(rect) => rect,
            None => return,
        };
        self.draw(|canvas| {
            canvas.shader.set_vec4(COLOR_UNIFORM, color.to_gl());
            unsafe {
                gl::Enable(gl::SCISSOR_TEST);
                gl::Scissor(rect.x, rect.y, rect.width, rect.height);
            }
        });
        unsafe { gl::Disable(gl::SCISSOR_TEST) }
    }

    /// Reads one pixel back from the current framebuffer. `None` outside the canvas.
    pub fn get_pixel(&self, point: Point) -> Option<Color> {
        if !point.is_inside(self.width, self.height) {
            return None;
        }
        let mut rgba = [0u8; 4];
        unsafe {
            gl::ReadPixels(
                point.x as _,
                point.y as _,
                1,
                1,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                rgba.as_mut_ptr() as *mut _,
            );
        }
        Some(Color::from_rgba_bytes(rgba))
    }

    /// Tracks a new framebuffer size and points the viewport at it.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        unsafe { gl::Viewport(0, 0, width as _, height as _) }
        log::debug!("canvas resized to {}x{}", width, height);
    }

    /// Draw the quad to the active context. `f` runs after everything is bound but before the
    /// draw call.
    fn draw<F: FnOnce(&Canvas)>(&self, f: F) {
        self.shader.use_program();
        unsafe {
            gl::BindVertexArray(self.vao);
            f(self);
            gl::DrawArrays(gl::TRIANGLES, 0, QUAD.len() as _);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
