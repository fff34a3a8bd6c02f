//! Error types returned by window setup and shader building.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The programmable stage a shader source belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure while reading, compiling or linking a shader program.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read {stage} shader source {}: {source}", path.display())]
    Read {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {log}")]
    Link { log: String },
    #[error("failed to allocate a shader program object")]
    Allocation,
}

/// Failure while bringing up a window, its GL context or the objects built on top of it.
///
/// Every setup entry point returns this instead of terminating the process, so callers decide
/// what an unusable display means for them.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create window and GL context: {0}")]
    ContextCreation(#[from] glutin::CreationError),
    #[error("failed to make the GL context current: {0}")]
    MakeCurrent(#[from] glutin::ContextError),
    #[error("failed to load OpenGL function pointers")]
    GlLoad,
    #[error("no monitor available to size the window")]
    NoMonitor,
    #[error("failed to allocate GL {0}")]
    Allocation(&'static str),
    #[error("built-in shader failed: {0}")]
    Shader(#[from] ShaderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_stage_and_path() {
        let err = ShaderError::Read {
            stage: ShaderStage::Vertex,
            path: PathBuf::from("shaders/missing.vert"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("vertex"));
        assert!(message.contains("shaders/missing.vert"));
    }

    #[test]
    fn compile_error_carries_native_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3: 'inColour' : undeclared identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader failed to compile: 0:3: 'inColour' : undeclared identifier"
        );
    }

    #[test]
    fn shader_errors_convert_into_init_errors() {
        let err: InitError = ShaderError::Link { log: "no main".to_string() }.into();
        assert!(matches!(err, InitError::Shader(ShaderError::Link { .. })));
        assert_eq!(err.to_string(), "built-in shader failed: shader program failed to link: no main");
    }
}
