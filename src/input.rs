//! Typed input routing.
//!
//! Window events are delivered to an [`InputHandler`] on the thread that drains the event loop,
//! while it is being drained. [`BasicInput`] is the polling alternative used by
//! [`Min2D::handle_basic_input`][crate::Min2D::handle_basic_input].

use std::collections::HashMap;

use glutin::event::{
    ElementState, KeyboardInput, ModifiersState, MouseButton, MouseScrollDelta, VirtualKeyCode,
    WindowEvent,
};

use crate::camera::CameraMovement;

/// Touchpads report scrolling in pixels; this many pixels count as one wheel notch.
const PIXELS_PER_LINE: f64 = 20.0;

/// Receives window events. Every method defaults to doing nothing.
pub trait InputHandler {
    fn on_key(&mut self, _key: VirtualKeyCode, _state: ElementState) {}

    /// Cursor position in window coordinates (origin top left).
    fn on_mouse_move(&mut self, _x: f64, _y: f64) {}

    fn on_mouse_button(&mut self, _button: MouseButton, _state: ElementState) {}

    /// Scroll offsets in wheel notches.
    fn on_scroll(&mut self, _x_offset: f64, _y_offset: f64) {}

    /// New framebuffer size in physical pixels.
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    fn on_close_requested(&mut self) {}

    fn on_modifiers(&mut self, _modifiers: ModifiersState) {}
}

/// Routes a single window event to `handler`.
pub fn dispatch<H: InputHandler + ?Sized>(handler: &mut H, event: &WindowEvent<'_>) {
    match event {
        WindowEvent::CloseRequested => handler.on_close_requested(),
        WindowEvent::KeyboardInput {
            input: KeyboardInput { virtual_keycode: Some(key), state, .. },
            ..
        } => handler.on_key(*key, *state),
        WindowEvent::CursorMoved { position, .. } => handler.on_mouse_move(position.x, position.y),
        WindowEvent::MouseInput { state, button, .. } => handler.on_mouse_button(*button, *state),
        WindowEvent::MouseWheel { delta, .. } => {
            let (x, y) = scroll_offsets(*delta);
            handler.on_scroll(x, y);
        }
        WindowEvent::Resized(size) => handler.on_resize(size.width, size.height),
        WindowEvent::ModifiersChanged(modifiers) => handler.on_modifiers(*modifiers),
        _ => {}
    }
}

/// Converts a scroll delta to wheel notches.
pub fn scroll_offsets(delta: MouseScrollDelta) -> (f64, f64) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (x as f64, y as f64),
        MouseScrollDelta::PixelDelta(position) => {
            (position.x / PIXELS_PER_LINE, position.y / PIXELS_PER_LINE)
        }
    }
}

/// The camera step bound to a key, if any.
pub fn camera_movement_for(key: VirtualKeyCode) -> Option<CameraMovement> {
    match key {
        VirtualKeyCode::W => Some(CameraMovement::Forward),
        VirtualKeyCode::S => Some(CameraMovement::Backward),
        VirtualKeyCode::A => Some(CameraMovement::Left),
        VirtualKeyCode::D => Some(CameraMovement::Right),
        _ => None,
    }
}

/// Turns absolute cursor positions into frame-to-frame offsets.
///
/// The first sample only records the position and reports no movement, so the camera doesn't jump
/// when the cursor first enters the window.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(x_offset, y_offset)` since the previous sample.
    ///
    /// Window y grows downwards, so `y_offset` is reversed: moving the cursor up is positive.
    pub fn offsets(&mut self, x: f64, y: f64) -> (f32, f32) {
        let (last_x, last_y) = self.last.unwrap_or((x, y));
        self.last = Some((x, y));
        ((x - last_x) as f32, (last_y - y) as f32)
    }

    /// Forgets the last position so the next sample is treated as the first one again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Contains the current state of the window in a polling-like fashion.
#[non_exhaustive]
#[derive(Default, Clone, PartialEq, Debug)]
pub struct BasicInput {
    /// The mouse position in canvas coordinates.
    ///
    /// The bottom left of the window is (0, 0), matching [`Point`][crate::min2d::Point]. To index
    /// a pixel, clamp to the canvas size and take the floor of each component.
    pub mouse_pos: (f64, f64),
    /// Stores whether a mouse button was down and is down, in that order.
    ///
    /// If a button has not been pressed yet it will not be in the map.
    pub mouse: HashMap<MouseButton, (bool, bool)>,
    /// Stores the previous and current "key down" states, in that order.
    ///
    /// If a key has not been pressed yet it will not be in the map.
    pub keys: HashMap<VirtualKeyCode, (bool, bool)>,
    /// The current modifier keys that are being pressed.
    pub modifiers: ModifiersState,
    /// Set when the window was resized since the last callback. Redraw if this is `true`.
    pub resized: bool,
    /// Height used to flip window y coordinates into canvas coordinates.
    canvas_height: u32,
}

impl BasicInput {
    pub(crate) fn new(canvas_height: u32) -> Self {
        BasicInput {
            canvas_height,
            ..Default::default()
        }
    }

    /// Copies the current states into the previous ones. Called once per frame before new events
    /// are applied.
    pub(crate) fn advance(&mut self) {
        for val in self.keys.values_mut() {
            val.0 = val.1;
        }
        for val in self.mouse.values_mut() {
            val.0 = val.1;
        }
        self.resized = false;
    }

    /// How `button` changed over the last frame.
    pub fn mouse_edge(&self, button: MouseButton) -> Edge {
        Edge::of(self.mouse.get(&button))
    }

    /// How `key` changed over the last frame.
    pub fn key_edge(&self, key: VirtualKeyCode) -> Edge {
        Edge::of(self.keys.get(&key))
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_edge(button) == Edge::Pressed
    }

    pub fn mouse_is_down(&self, button: MouseButton) -> bool {
        self.mouse_edge(button).is_down()
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_edge(button) == Edge::Released
    }

    pub fn key_pressed(&self, key: VirtualKeyCode) -> bool {
        self.key_edge(key) == Edge::Pressed
    }

    pub fn key_is_down(&self, key: VirtualKeyCode) -> bool {
        self.key_edge(key).is_down()
    }

    pub fn key_released(&self, key: VirtualKeyCode) -> bool {
        self.key_edge(key) == Edge::Released
    }
}

/// A key or button state across one frame boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Up,
    /// Went down this frame.
    Pressed,
    Held,
    /// Went up this frame.
    Released,
}

impl Edge {
    /// From a `(was down, is down)` pair. Never-seen inputs are up.
    fn of(states: Option<&(bool, bool)>) -> Edge {
        match states.copied().unwrap_or_default() {
            (false, false) => Edge::Up,
            (false, true) => Edge::Pressed,
            (true, true) => Edge::Held,
            (true, false) => Edge::Released,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, Edge::Pressed | Edge::Held)
    }
}

impl InputHandler for BasicInput {
    fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        let entry = self.keys.entry(key).or_insert((false, false));
        entry.1 = state == ElementState::Pressed;
    }

    fn on_mouse_move(&mut self, x: f64, y: f64) {
        self.mouse_pos = (x, self.canvas_height as f64 - y);
    }

    fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let entry = self.mouse.entry(button).or_insert((false, false));
        entry.1 = state == ElementState::Pressed;
    }

    fn on_resize(&mut self, _width: u32, height: u32) {
        self.canvas_height = height;
        self.resized = true;
    }

    fn on_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }
}
