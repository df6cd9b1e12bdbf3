//! Constantes del motor de cadenas.
//!
//! `GENERATOR_VERSION` entra en el token de versión del build: subirla
//! invalida los temporizadores y penalizaciones guardados en el navegador
//! aunque el contenido no cambie. No afecta nombres de archivo ni secretos.

/// Versión lógica del generador.
pub const GENERATOR_VERSION: &str = "H1.0";
