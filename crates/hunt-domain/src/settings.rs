//! Configuración global del juego, inmutable tras la carga.
//!
//! Se construye una sola vez al inicio de la generación y se pasa por
//! referencia a cada emisor; nunca es estado global ambiente.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::record::Record;

/// Contacto de un organizador, expuesto en la página cuando el contador
/// llega a cero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Configuración global reconocida en `hunt.conf`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HuntSettings {
    /// Contraseña de los índices de operador; su hash se incrusta en esas
    /// páginas (ofuscación de presentación, no control de acceso real).
    pub admin_password: Option<String>,
    pub default_timeout_minutes: Option<u32>,
    pub hint_penalty_minutes: Option<u32>,
    /// Endpoint opcional del colector de eventos en vivo.
    pub tracker_url: Option<String>,
    pub organizers: Vec<Organizer>,
}

impl HuntSettings {
    pub fn from_record(record: &Record) -> Result<Self, DomainError> {
        let organizers = match record.object_list("organizers")? {
            None => Vec::new(),
            Some(objects) => {
                let mut out = Vec::with_capacity(objects.len());
                for obj in objects {
                    let name = obj.get("name")
                                  .filter(|n| !n.is_empty())
                                  .ok_or_else(|| DomainError::InvalidValue {
                                      record: record.id.clone(),
                                      field: "organizers".to_string(),
                                      detail: "cada organizador necesita 'name'".to_string(),
                                  })?;
                    out.push(Organizer { name: name.clone(),
                                         phone: obj.get("phone").cloned(),
                                         telegram: obj.get("telegram").cloned(),
                                         whatsapp: obj.get("whatsapp").cloned() });
                }
                out
            }
        };
        Ok(HuntSettings { admin_password: record.scalar("admin_password").map(str::to_string),
                          default_timeout_minutes: record.integer("default_timeout_minutes")?,
                          hint_penalty_minutes: record.integer("hint_penalty_minutes")?,
                          tracker_url: record.scalar("tracker_url").map(str::to_string),
                          organizers })
    }

    /// Penalización por pedir la respuesta, en minutos (0 si no se configuró).
    pub fn penalty_minutes(&self) -> u32 {
        self.hint_penalty_minutes.unwrap_or(0)
    }
}
