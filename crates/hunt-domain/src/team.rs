use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::markdown::render_markdown;
use crate::record::Record;

/// Un equipo: código de inicio y su recorrido ordenado de tareas.
///
/// `sequence` puede referenciar cualquier id de tarea (las tareas no
/// pertenecen a un equipo) y admite duplicados; el orden es significativo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: String,
    display_name: String,
    start_code: String,
    sequence: Vec<String>,
    welcome_html: String,
}

impl Team {
    pub fn from_record(record: &Record) -> Result<Self, DomainError> {
        let display_name = record.scalar("name").unwrap_or(&record.id).to_string();
        let start_code = record.require_scalar("start_code")?.to_string();
        let sequence: Vec<String> = record.string_list("sequence")?
                                          .ok_or_else(|| DomainError::MissingField { record: record.id.clone(),
                                                                                     field: "sequence".to_string() })?
                                          .to_vec();
        if sequence.is_empty() {
            return Err(DomainError::InvalidValue { record: record.id.clone(),
                                                   field: "sequence".to_string(),
                                                   detail: "la secuencia no puede estar vacía".to_string() });
        }
        Ok(Team { id: record.id.clone(),
                  display_name,
                  start_code,
                  sequence,
                  welcome_html: render_markdown(&record.body) })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn start_code(&self) -> &str {
        &self.start_code
    }

    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    pub fn welcome_html(&self) -> &str {
        &self.welcome_html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_record;

    #[test]
    fn team_from_record() {
        let text = "name: Equipo Azul\nstart_code: AZUL1\nsequence:\n  - fuente\n  - mirador\n  - final\n\nBienvenidos.";
        let team = Team::from_record(&parse_record("azul", text).unwrap()).unwrap();
        assert_eq!(team.id(), "azul");
        assert_eq!(team.display_name(), "Equipo Azul");
        assert_eq!(team.start_code(), "AZUL1");
        assert_eq!(team.sequence(), &["fuente", "mirador", "final"]);
        assert!(team.welcome_html().contains("Bienvenidos"));
    }

    #[test]
    fn name_defaults_to_id() {
        let team = Team::from_record(&parse_record("verde", "start_code: V1\nsequence:\n  - a\n").unwrap()).unwrap();
        assert_eq!(team.display_name(), "verde");
    }

    #[test]
    fn missing_start_code_fails() {
        let err = Team::from_record(&parse_record("t", "sequence:\n  - a\n").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::MissingField { ref field, .. } if field == "start_code"));
    }

    #[test]
    fn empty_sequence_fails() {
        let err = Team::from_record(&parse_record("t", "start_code: X\nsequence:\n").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { ref field, .. } if field == "sequence"));
    }

    #[test]
    fn sequence_as_scalar_fails() {
        let err = Team::from_record(&parse_record("t", "start_code: X\nsequence: a, b\n").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }
}
