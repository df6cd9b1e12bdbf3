//! Derivaciones one-way sobre códigos normalizados.
//!
//! Dos funciones distintas a propósito:
//! - `page_name` (blake3 truncado a 16 hex, ~64 bits): sólo hace impredecible
//!   el nombre del archivo. Una colisión aquí es cosmética.
//! - `secret_hash` (SHA-256 completo, 64 hex): es el valor incrustado en la
//!   página contra el que se compara el código enviado. Una colisión aquí
//!   sería un fallo de seguridad, de ahí el digest fuerte.
//!
//! Ambas son funciones puras del código normalizado: el mismo código produce
//! siempre el mismo nombre y el mismo secreto entre ejecuciones.

use blake3::Hasher;
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::to_canonical_json;

/// Forma canónica de un código: sin espacios alrededor y en mayúsculas.
/// Los códigos son insensibles a mayúsculas por diseño; ésta es la única
/// normalización del sistema y ocurre sólo en el momento de hashear.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Derivación de nombre de archivo para el código que da acceso a una página.
pub fn page_name(code: &str) -> String {
    let mut h = Hasher::new();
    h.update(normalize_code(code).as_bytes());
    let hex = h.finalize().to_hex().to_string();
    hex[..16].to_string()
}

/// Derivación del secreto de desbloqueo incrustado en la página.
pub fn secret_hash(code: &str) -> String {
    hex::encode(Sha256::digest(normalize_code(code).as_bytes()))
}

/// Hashea un string arbitrario y devuelve hex completo.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hashea un `Value` tras canonicalizarlo.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
