//! Contains the [`GlutinBreakout`] struct, which is a way to "break out" the Glutin context and
//! [`Canvas`] object and manipulate them directly.

use glutin::{ContextError, PossiblyCurrent, WindowedContext};

use crate::min2d::canvas::Canvas;

/// Direct access to a canvas window, obtained from
/// [`Min2D::glutin_breakout`][crate::Min2D::glutin_breakout].
///
/// Useful when the synchronous [`is_running`][crate::Min2D::is_running] loop gets in the way,
/// e.g. to drive several canvases from one event loop. Events are yours to route; the canvas only
/// draws into whichever context is current.
#[derive(Debug)]
pub struct GlutinBreakout {
    /// Dropped first so its GL objects go away while the context is alive.
    pub canvas: Canvas,
    /// Contains the OpenGL context and its associated window.
    pub context: WindowedContext<PossiblyCurrent>,
}

impl GlutinBreakout {
    /// Makes this window's context current on the calling thread.
    ///
    /// # Safety
    ///
    /// Same contract as glutin's `make_current`: the previously current context must not be used
    /// from this thread until it is made current again.
    pub unsafe fn make_current(&mut self) -> Result<(), ContextError> {
        replace_with(&mut self.context, |context| match context.make_current() {
            Ok(context) => (context, Ok(())),
            Err((context, err)) => (context, Err(err)),
        })
    }

    /// Presents the canvas.
    pub fn refresh(&self) -> Result<(), ContextError> {
        self.context.swap_buffers()
    }
}

/// Runs a by-value transition on `slot`. glutin hands the context back on both paths, so the slot
/// is always refilled.
///
/// # Safety
///
/// `f` must not unwind: a panic would leave `slot` read but never rewritten.
unsafe fn replace_with<T, R, F: FnOnce(T) -> (T, R)>(slot: &mut T, f: F) -> R {
    let (next, result) = f(std::ptr::read(slot));
    std::ptr::write(slot, next);
    result
}
