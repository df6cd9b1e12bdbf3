//! Agregación de errores de build. La política de propagación es simple:
//! cualquier error de configuración aborta la generación entera; no se
//! publica salida parcial.

use thiserror::Error;

use hunt_core::ChainError;
use hunt_domain::DomainError;
use hunt_emit::EmitError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("contenido inválido: {0}")]
    Domain(#[from] DomainError),

    #[error("cadena inválida: {0}")]
    Chain(#[from] ChainError),

    #[error("emisión: {0}")]
    Emit(#[from] EmitError),

    #[error("directorio de contenido no encontrado: '{path}'")]
    MissingContentDir { path: String },

    #[error("E/S en '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        BuildError::Io { path: path.display().to_string(), source }
    }

    /// Código de salida del proceso para este error: 3 carga de contenido,
    /// 4 validación de cadenas, 5 E/S o emisión.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Domain(_) | BuildError::MissingContentDir { .. } => 3,
            BuildError::Chain(_) => 4,
            BuildError::Emit(_) | BuildError::Io { .. } => 5,
        }
    }
}
