// errors.rs
use thiserror::Error;

/// Error del dominio: contenido malformado o campos inválidos.
///
/// Todos son fatales en carga: la generación aborta sin emitir salida parcial.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Cabecera malformada en '{record}' (línea {line}): {detail}")]
    MalformedHeader { record: String, line: usize, detail: String },

    #[error("Campo requerido ausente en '{record}': '{field}'")]
    MissingField { record: String, field: String },

    #[error("Valor inválido en '{record}', campo '{field}': {detail}")]
    InvalidValue { record: String, field: String, detail: String },
}
