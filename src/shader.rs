//! Vertex + fragment shader programs.

use std::ffi::CString;
use std::fs;
use std::path::Path;

use cgmath::{Matrix4, Vector3, Vector4};
use gl::types::*;
use rustic_gl::error::GlError;

use crate::error::{ShaderError, ShaderStage};

/// A linked shader program.
///
/// The GL program is deleted when the `Shader` is dropped, so it must be dropped while the context
/// that created it is still alive.
#[derive(Debug)]
pub struct Shader {
    id: GLuint,
}

impl Shader {
    /// Reads both sources from disk, then compiles and links them.
    ///
    /// ```no_run
    /// # fn demo() -> Result<(), mini_gl_app::ShaderError> {
    /// use mini_gl_app::Shader;
    ///
    /// let shader = Shader::from_files("demos/shaders/cube.vert", "demos/shaders/cube.frag")?;
    /// shader.use_program();
    /// shader.set_float("u_time", 0.5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        vertex_path: P,
        fragment_path: Q,
    ) -> Result<Shader, ShaderError> {
        let vertex = read_source(ShaderStage::Vertex, vertex_path.as_ref())?;
        let fragment = read_source(ShaderStage::Fragment, fragment_path.as_ref())?;
        Shader::from_source(&vertex, &fragment)
    }

    /// Compiles and links in-memory sources.
    pub fn from_source(vertex_source: &str, fragment_source: &str) -> Result<Shader, ShaderError> {
        let vertex = compile_stage(ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(err) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(err);
            }
        };

        let linked = unsafe { link_program(&[vertex, fragment]) };

        unsafe {
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);
        }

        let id = linked.map_err(|err| {
            log::error!("{}", err);
            err
        })?;
        Ok(Shader { id })
    }

    /// The GL program name.
    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    /// Looks up a uniform. Returns -1 when the program has no active uniform with that name, which
    /// turns the setters into no-ops.
    pub fn uniform_location(&self, name: &str) -> GLint {
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) },
            Err(_) => {
                log::warn!("uniform name {:?} contains a nul byte", name);
                -1
            }
        }
    }

    // The setters write to the currently bound program, like the underlying GL calls.

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as GLint);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        unsafe { gl::Uniform1i(self.uniform_location(name), value) }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        unsafe { gl::Uniform1f(self.uniform_location(name), value) }
    }

    pub fn set_vec3<V: Into<Vector3<f32>>>(&self, name: &str, value: V) {
        let v = value.into();
        unsafe { gl::Uniform3f(self.uniform_location(name), v.x, v.y, v.z) }
    }

    pub fn set_vec4<V: Into<Vector4<f32>>>(&self, name: &str, value: V) {
        let v = value.into();
        unsafe { gl::Uniform4f(self.uniform_location(name), v.x, v.y, v.z, v.w) }
    }

    pub fn set_mat4(&self, name: &str, matrix: &Matrix4<f32>) {
        let columns: &[f32; 16] = matrix.as_ref();
        unsafe { gl::UniformMatrix4fv(self.uniform_location(name), 1, gl::FALSE, columns.as_ptr()) }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

fn read_source(stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| {
        let err = ShaderError::Read {
            stage,
            path: path.to_path_buf(),
            source,
        };
        log::error!("{}", err);
        err
    })
}

fn compile_stage(stage: ShaderStage, source: &str) -> Result<GLuint, ShaderError> {
    rustic_gl::raw::create_shader(stage.gl_enum(), source).map_err(|err| {
        let err = ShaderError::Compile {
            stage,
            log: info_log(err),
        };
        log::error!("{}", err);
        err
    })
}

unsafe fn link_program(shaders: &[GLuint]) -> Result<GLuint, ShaderError> {
    let program = rustic_gl::raw::create_program().map_err(|err| {
        log::error!("could not create a shader program: {}", err);
        ShaderError::Allocation
    })?;
    for &shader in shaders {
        gl::AttachShader(program, shader);
    }
    gl::LinkProgram(program);
    for &shader in shaders {
        gl::DetachShader(program, shader);
    }

    match rustic_gl::raw::get_link_status(program) {
        Ok(_) => Ok(program),
        Err(err) => {
            gl::DeleteProgram(program);
            Err(ShaderError::Link { log: info_log(err) })
        }
    }
}

/// The driver's info log carried by `err`, or its description when there is none.
fn info_log(err: GlError) -> String {
    match err {
        GlError::ShaderCompilation(Some(info)) => info.trim_end().to_string(),
        GlError::ShaderCompilation(None) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_keeps_the_driver_text() {
        let log = info_log(GlError::ShaderCompilation(Some(
            "0:1(1): error: syntax error\n".to_string(),
        )));
        assert_eq!(log, "0:1(1): error: syntax error");
        assert_eq!(info_log(GlError::ShaderCompilation(None)), "");
    }

    #[test]
    fn missing_vertex_file_is_reported_before_touching_gl() {
        let err = Shader::from_files("does/not/exist.vert", "does/not/exist.frag").unwrap_err();
        match err {
            ShaderError::Read { stage, path, .. } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert_eq!(path, Path::new("does/not/exist.vert"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn missing_fragment_file_names_the_fragment_stage() {
        let dir = std::env::temp_dir().join("mini_gl_app_shader_test");
        fs::create_dir_all(&dir).unwrap();
        let vertex = dir.join("ok.vert");
        fs::write(&vertex, "#version 330 core\nvoid main() {}\n").unwrap();

        let err = Shader::from_files(&vertex, dir.join("missing.frag")).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Read { stage: ShaderStage::Fragment, .. }
        ));
    }
}
