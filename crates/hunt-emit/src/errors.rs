// errors.rs
use thiserror::Error;

/// Errores de emisión: E/S sobre el árbol de salida o un modelo incoherente
/// (cadena que referencia contenido inexistente, ya validado antes).
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("E/S en '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("modelo incoherente: {detail}")]
    InconsistentModel { detail: String },
}

impl EmitError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        EmitError::Io { path: path.display().to_string(), source }
    }
}
