//! Huntflow Rust Library
//!
//! Capa de aplicación del generador:
//! - `config` lee las rutas por defecto del entorno (.env).
//! - `generate` orquesta la carga de contenido, la construcción de cadenas
//!   y la emisión del árbol estático.
//! - `errors` agrega los errores de las capas inferiores en `BuildError`.
//!
//! Puede usarse desde el binario `huntflow` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod generate;

pub use errors::BuildError;
pub use generate::{build_site, BuildReport};
