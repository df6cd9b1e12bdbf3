//! Escritor del árbol de salida: borrado y reconstrucción destructivos.
//!
//! La reconstrucción no es atómica; un fallo a mitad deja un árbol parcial.
//! Aceptable para un paso de build offline invocado por el operador: la
//! siguiente ejecución vuelve a partir de cero.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::EmitError;

pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    /// Elimina el árbol anterior (si existe) y crea la raíz vacía.
    pub fn reset(root: &Path) -> Result<Self, EmitError> {
        if root.exists() {
            fs::remove_dir_all(root).map_err(|e| EmitError::io(root, e))?;
        }
        fs::create_dir_all(root).map_err(|e| EmitError::io(root, e))?;
        Ok(OutputWriter { root: root.to_path_buf() })
    }

    /// Escribe un archivo relativo a la raíz, creando directorios intermedios.
    pub fn write(&self, relative: &str, contents: &str) -> Result<(), EmitError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| EmitError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| EmitError::io(&path, e))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
