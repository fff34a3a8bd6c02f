extern crate mini_gl_app;

use mini_gl_app::gl;
use mini_gl_app::gl::types::*;
use mini_gl_app::logging::{init_logging, LoggingConfig};
use mini_gl_app::{config, AppHooks, AppState, Application, Shader};

use std::mem::size_of_val;

/// A colored cube around the origin, two triangles per face.
const CUBE: [[f32; 3]; 36] = [
    [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5],
    [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5],
];

#[derive(Default)]
struct CubeViewer {
    shader: Option<Shader>,
    vao: GLuint,
    vbo: GLuint,
    time: f32,
}

impl AppHooks for CubeViewer {
    fn on_startup(&mut self, state: &mut AppState) {
        state.camera.position.z = 3.0;

        match Shader::from_files("demos/shaders/cube.vert", "demos/shaders/cube.frag") {
            Ok(shader) => self.shader = Some(shader),
            Err(err) => {
                log::error!("cube shader unavailable, closing: {}", err);
                state.request_close();
                return;
            }
        }

        unsafe {
            gl::GenVertexArrays(1, &mut self.vao);
            gl::GenBuffers(1, &mut self.vbo);
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                size_of_val(&CUBE) as _,
                CUBE.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 3 * 4, std::ptr::null());
            gl::EnableVertexAttribArray(0);
            gl::BindVertexArray(0);
            gl::ClearColor(0.1, 0.1, 0.12, 1.0);
        }
    }

    fn on_update(&mut self, state: &mut AppState) {
        let shader = match &self.shader {
            Some(shader) => shader,
            None => return,
        };
        self.time += state.delta_time();

        shader.use_program();
        shader.set_mat4("u_view", &state.camera.view_matrix());
        shader.set_mat4("u_projection", &state.camera.projection_matrix(state.aspect_ratio()));
        shader.set_vec3("u_tint", [0.5 + 0.5 * self.time.sin(), 0.6, 0.9]);

        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, CUBE.len() as _);
            gl::BindVertexArray(0);
        }
    }

    fn on_shutdown(&mut self, _state: &mut AppState) {
        self.shader.take();
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let app = match Application::with_config(config! {
        window_title: "window",
        window_size: (1280, 720),
    }) {
        Ok(app) => app,
        Err(err) => {
            log::error!("could not open the application window: {}", err);
            std::process::exit(1);
        }
    };

    let mut viewer = CubeViewer::default();
    app.run(&mut viewer);
}
