//! Window and context settings shared by [`Application`][crate::Application] and
//! [`Min2D`][crate::Min2D].

use glutin::dpi::PhysicalSize;

/// Configuration for "advanced" use cases, when [`Application::new`][crate::Application::new]
/// or [`min2d::init`][crate::min2d::init] aren't doing what you need.
///
/// The following pattern is recommended when creating a config:
///
/// ```
/// use mini_gl_app::{config, Config};
///
/// let config: Config = config! {
///     /* specify whichever fields you need to set, for example: */
///     window_title: "Hello",
///     resizable: true,
///     vsync: false,
/// };
/// assert!(config.resizable);
/// assert_eq!(config.gl_version, (3, 3));
/// ```
///
/// Fields you leave out keep their [`Default`] values.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Builder)]
#[builder(build_fn(skip))]
pub struct Config {
    /// Title shown in the window decorations.
    #[builder(setter(into))]
    pub window_title: String,
    /// Inner size of the window in physical pixels.
    ///
    /// `None` lets the caller pick: `Application` uses the primary monitor's resolution and
    /// `Min2D` falls back to 800x600.
    #[builder(setter(into, strip_option))]
    pub window_size: Option<PhysicalSize<u32>>,
    pub resizable: bool,
    /// Borderless fullscreen on the primary monitor.
    pub fullscreen: bool,
    pub visible: bool,
    /// Requested OpenGL version. The core profile is always requested.
    pub gl_version: (u8, u8),
    pub vsync: bool,
    /// Depth buffer bits. `Min2D` ignores this and never asks for a depth buffer.
    pub depth_bits: u8,
    /// Grab and hide the cursor so mouse look keeps working at the window edges.
    pub capture_cursor: bool,
}

impl ConfigBuilder {
    /// Builds the config. Unset fields are taken from [`Config::default`].
    pub fn build(&self) -> Config {
        let defaults = Config::default();
        Config {
            window_title: self.window_title.clone().unwrap_or(defaults.window_title),
            window_size: self.window_size.unwrap_or(defaults.window_size),
            resizable: self.resizable.unwrap_or(defaults.resizable),
            fullscreen: self.fullscreen.unwrap_or(defaults.fullscreen),
            visible: self.visible.unwrap_or(defaults.visible),
            gl_version: self.gl_version.unwrap_or(defaults.gl_version),
            vsync: self.vsync.unwrap_or(defaults.vsync),
            depth_bits: self.depth_bits.unwrap_or(defaults.depth_bits),
            capture_cursor: self.capture_cursor.unwrap_or(defaults.capture_cursor),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_title: "mini_gl_app".to_string(),
            window_size: None,
            resizable: true,
            fullscreen: false,
            visible: true,
            gl_version: (3, 3),
            vsync: true,
            depth_bits: 24,
            capture_cursor: false,
        }
    }
}

impl Config {
    /// The configured size, or `fallback` when none was given.
    pub fn size_or(&self, fallback: PhysicalSize<u32>) -> PhysicalSize<u32> {
        self.window_size.unwrap_or(fallback)
    }
}

/// Creates a [`Config`] from `field: value` pairs, leaving everything else at its default.
///
/// ```
/// use mini_gl_app::config;
///
/// let config = config! {
///     window_title: "Pixels",
///     window_size: (640, 480),
/// };
/// assert_eq!(config.window_title, "Pixels");
///
/// let defaults = config! {};
/// assert_eq!(defaults.window_size, None);
/// ```
#[macro_export]
macro_rules! config {
    {$($k:ident: $v:expr),+ $(,)?} => {
        $crate::config::ConfigBuilder::default()
            $(.$k($v))+
            .build()
    };
    {} => {
        <$crate::config::Config as ::std::default::Default>::default()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_unset_fields_from_defaults() {
        let config = ConfigBuilder::default().window_title("x").fullscreen(true).build();
        let defaults = Config::default();
        assert_eq!(config.window_title, "x");
        assert!(config.fullscreen);
        assert_eq!(config.gl_version, defaults.gl_version);
        assert_eq!(config.depth_bits, defaults.depth_bits);
        assert_eq!(config.window_size, None);
    }

    #[test]
    fn window_size_accepts_tuples() {
        let config = config! { window_size: (1024, 768) };
        assert_eq!(config.window_size, Some(PhysicalSize::new(1024, 768)));
        assert_eq!(config.size_or(PhysicalSize::new(1, 1)), PhysicalSize::new(1024, 768));
    }

    #[test]
    fn size_falls_back_when_unset() {
        let config = config! {};
        assert_eq!(config.size_or(PhysicalSize::new(800, 600)), PhysicalSize::new(800, 600));
    }
}
