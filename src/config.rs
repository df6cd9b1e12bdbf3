//! Configuración del entorno de generación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) con las rutas por defecto de contenido y salida. La
//! configuración del juego en sí (contraseña, penalizaciones, organizadores)
//! no vive aquí: se carga de `hunt.conf` y se pasa explícitamente.
use once_cell::sync::Lazy;
use std::env;

/// Rutas de trabajo del generador.
pub struct AppConfig {
    /// Directorio con `tasks/`, `teams/` y `hunt.conf`.
    pub content_dir: String,
    /// Raíz del árbol publicable (se borra y reconstruye en cada build).
    pub out_dir: String,
    /// Destino del manifiesto de pruebas, fuera del árbol publicable.
    pub manifest_path: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let content_dir = env::var("HUNT_CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
    let out_dir = env::var("HUNT_OUT_DIR").unwrap_or_else(|_| "dist/site".to_string());
    let manifest_path = env::var("HUNT_MANIFEST").unwrap_or_else(|_| "dist/manifest.md".to_string());
    AppConfig { content_dir, out_dir, manifest_path }
});
