//! Window and OpenGL context creation.

use glutin::dpi::PhysicalSize;
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::{Fullscreen, WindowBuilder};
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

use crate::config::Config;
use crate::error::InitError;

/// The resolution of the primary monitor, used when a window should cover the whole screen.
pub fn primary_monitor_size(event_loop: &EventLoop<()>) -> Result<PhysicalSize<u32>, InitError> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(InitError::NoMonitor)?;
    let size = monitor.size();
    log::debug!(
        "primary monitor {:?} is {}x{}",
        monitor.name(),
        size.width,
        size.height
    );
    Ok(size)
}

/// Create a window with a current OpenGL context given a configuration.
///
/// The context is made current on the calling thread and the `gl` function pointers are loaded
/// from it, so GL calls work as soon as this returns.
pub fn init_gl_context(
    config: &Config,
    event_loop: &EventLoop<()>,
    size: PhysicalSize<u32>,
) -> Result<WindowedContext<PossiblyCurrent>, InitError> {
    let fullscreen = if config.fullscreen {
        Some(Fullscreen::Borderless(event_loop.primary_monitor()))
    } else {
        None
    };

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(size)
        .with_resizable(config.resizable)
        .with_visible(config.visible)
        .with_fullscreen(fullscreen);

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, config.gl_version))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.vsync)
        .with_depth_buffer(config.depth_bits)
        .build_windowed(window, event_loop)?;

    let context = unsafe { context.make_current().map_err(|(_, err)| err)? };

    gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);
    if !gl::Clear::is_loaded() || !gl::DrawArrays::is_loaded() {
        return Err(InitError::GlLoad);
    }

    if config.capture_cursor {
        let window = context.window();
        if let Err(err) = window.set_cursor_grab(true) {
            log::warn!("failed to grab the cursor: {}", err);
        }
        window.set_cursor_visible(false);
    }

    log::info!(
        "created \"{}\" ({}x{}, OpenGL {}.{} core)",
        config.window_title,
        size.width,
        size.height,
        config.gl_version.0,
        config.gl_version.1
    );

    Ok(context)
}

/// Keeps the loop spinning unless an exit was already requested during this pass.
pub(crate) fn keep_polling(flow: &mut ControlFlow) {
    if *flow != ControlFlow::Exit {
        *flow = ControlFlow::Poll;
    }
}
