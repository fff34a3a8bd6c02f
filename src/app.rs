//! The windowed application loop.

use glutin::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::run_return::EventLoopExtRunReturn;
use glutin::window::Window;
use glutin::{PossiblyCurrent, WindowedContext};

use crate::camera::Camera;
use crate::config::Config;
use crate::error::InitError;
use crate::input::{camera_movement_for, dispatch, CursorTracker, InputHandler};
use crate::time::FrameClock;
use crate::window::{init_gl_context, keep_polling, primary_monitor_size};

/// User code plugged into [`Application::run`].
pub trait AppHooks {
    /// Called once, before the first frame.
    fn on_startup(&mut self, _state: &mut AppState) {}

    /// Called every frame after the buffers were cleared and before they are presented.
    fn on_update(&mut self, state: &mut AppState);

    /// Called once after the loop ends, while the context is still current. Release GL objects
    /// created in the other hooks here.
    fn on_shutdown(&mut self, _state: &mut AppState) {}
}

/// Everything the hooks and the input handlers share.
#[derive(Debug, Clone)]
pub struct AppState {
    pub camera: Camera,
    delta_time: f32,
    width: u32,
    height: u32,
    cursor: CursorTracker,
    close_requested: bool,
    viewport_dirty: bool,
}

impl AppState {
    pub fn new(width: u32, height: u32) -> Self {
        AppState {
            camera: Camera::default(),
            delta_time: 0.0,
            width,
            height,
            cursor: CursorTracker::new(),
            close_requested: false,
            viewport_dirty: false,
        }
    }

    /// Seconds between the start of the previous frame and this one.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Framebuffer size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Ends the loop at the next frame boundary.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn take_viewport_update(&mut self) -> Option<(u32, u32)> {
        if self.viewport_dirty {
            self.viewport_dirty = false;
            Some((self.width, self.height))
        } else {
            None
        }
    }
}

impl InputHandler for AppState {
    fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        if key == VirtualKeyCode::Escape && state == ElementState::Pressed {
            self.request_close();
        }
        // Held keys arrive as repeated presses.
        if state == ElementState::Released {
            return;
        }
        if let Some(direction) = camera_movement_for(key) {
            self.camera.process_keyboard(direction, self.delta_time);
        }
    }

    fn on_mouse_move(&mut self, x: f64, y: f64) {
        let (x_offset, y_offset) = self.cursor.offsets(x, y);
        self.camera.process_mouse_movement(x_offset, y_offset, true);
    }

    fn on_scroll(&mut self, _x_offset: f64, y_offset: f64) {
        self.camera.process_mouse_scroll(y_offset as f32);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.viewport_dirty = true;
    }

    fn on_close_requested(&mut self) {
        self.request_close();
    }
}

/// A window with a current GL context and a blocking frame loop.
///
/// ```no_run
/// use mini_gl_app::{AppHooks, AppState, Application};
///
/// struct Spin;
///
/// impl AppHooks for Spin {
///     fn on_update(&mut self, state: &mut AppState) {
///         let _view = state.camera.view_matrix();
///     }
/// }
///
/// let app = Application::new("window").unwrap();
/// app.run(&mut Spin);
/// ```
#[derive(Debug)]
pub struct Application {
    context: WindowedContext<PossiblyCurrent>,
    event_loop: EventLoop<()>,
    state: AppState,
}

impl Application {
    /// Opens a window the size of the primary monitor.
    pub fn new<S: ToString>(title: S) -> Result<Application, InitError> {
        Application::with_config(crate::config! {
            window_title: title.to_string(),
        })
    }

    pub fn with_config(config: Config) -> Result<Application, InitError> {
        let event_loop = EventLoop::new();
        let size = match config.window_size {
            Some(size) => size,
            None => primary_monitor_size(&event_loop)?,
        };
        let context = init_gl_context(&config, &event_loop, size)?;

        unsafe { gl::Viewport(0, 0, size.width as _, size.height as _) };

        Ok(Application {
            context,
            event_loop,
            state: AppState::new(size.width, size.height),
        })
    }

    pub fn window(&self) -> &Window {
        self.context.window()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Runs until the window is closed or Escape is pressed.
    ///
    /// Each frame: measure the delta time, clear color and depth, call
    /// [`on_update`][AppHooks::on_update], present, then handle the events that arrived meanwhile.
    pub fn run<H: AppHooks + ?Sized>(self, hooks: &mut H) {
        let Application {
            context,
            mut event_loop,
            mut state,
        } = self;

        hooks.on_startup(&mut state);

        unsafe { gl::Enable(gl::DEPTH_TEST) };
        let mut clock = FrameClock::new();

        event_loop.run_return(|event, _, flow| {
            keep_polling(flow);
            match event {
                Event::WindowEvent { event, .. } => {
                    if let WindowEvent::Resized(size) = &event {
                        context.resize(*size);
                    }
                    dispatch(&mut state, &event);
                }
                Event::MainEventsCleared => {
                    if state.close_requested() {
                        *flow = ControlFlow::Exit;
                        return;
                    }
                    if let Some((width, height)) = state.take_viewport_update() {
                        log::debug!("viewport resized to {}x{}", width, height);
                        unsafe { gl::Viewport(0, 0, width as _, height as _) };
                    }

                    state.delta_time = clock.tick();
                    unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };

                    hooks.on_update(&mut state);

                    if let Err(err) = context.swap_buffers() {
                        log::error!("failed to swap buffers: {}", err);
                    }
                }
                _ => {}
            }
        });

        hooks.on_shutdown(&mut state);
        log::info!("application loop finished after {} frames", clock.frame_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    #[test]
    fn escape_press_requests_close() {
        let mut state = AppState::new(800, 600);
        state.on_key(VirtualKeyCode::Escape, ElementState::Released);
        assert!(!state.close_requested());
        state.on_key(VirtualKeyCode::Escape, ElementState::Pressed);
        assert!(state.close_requested());
    }

    #[test]
    fn window_close_requests_close() {
        let mut state = AppState::new(800, 600);
        state.on_close_requested();
        assert!(state.close_requested());
    }

    #[test]
    fn movement_keys_ignore_release() {
        let mut state = AppState::new(800, 600);
        state.delta_time = 1.0;
        state.on_key(VirtualKeyCode::W, ElementState::Released);
        assert_eq!(state.camera.position, Point3::new(0.0, 0.0, 0.0));

        state.on_key(VirtualKeyCode::W, ElementState::Pressed);
        assert!(state.camera.position.z < 0.0);
    }

    #[test]
    fn movement_with_zero_delta_time_stays_put() {
        let mut state = AppState::new(800, 600);
        state.on_key(VirtualKeyCode::D, ElementState::Pressed);
        assert_eq!(state.camera.position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn first_mouse_move_does_not_turn_the_camera() {
        let mut state = AppState::new(800, 600);
        let before = state.camera.clone();
        state.on_mouse_move(1500.0, 20.0);
        assert_eq!(state.camera.yaw, before.yaw);
        assert_eq!(state.camera.pitch, before.pitch);

        state.on_mouse_move(1510.0, 20.0);
        assert!(state.camera.yaw > before.yaw);
    }

    #[test]
    fn scroll_zooms() {
        let mut state = AppState::new(800, 600);
        state.on_scroll(0.0, 5.0);
        assert_eq!(state.camera.zoom, 40.0);
    }

    #[test]
    fn resize_updates_size_and_schedules_viewport() {
        let mut state = AppState::new(800, 600);
        assert_eq!(state.take_viewport_update(), None);

        state.on_resize(1024, 512);
        assert_eq!(state.size(), (1024, 512));
        assert_eq!(state.aspect_ratio(), 2.0);
        assert_eq!(state.take_viewport_update(), Some((1024, 512)));
        assert_eq!(state.take_viewport_update(), None);
    }

    #[test]
    fn minimized_window_has_a_usable_aspect_ratio() {
        let mut state = AppState::new(800, 600);
        state.on_resize(0, 0);
        assert_eq!(state.aspect_ratio(), 1.0);
    }
}
