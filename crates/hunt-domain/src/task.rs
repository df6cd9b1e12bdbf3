use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::markdown::render_markdown;
use crate::record::Record;

/// Una tarea del juego: un paso/ubicación con contenido descriptivo y,
/// opcionalmente, el código que el equipo debe encontrar allí.
///
/// `code = None` marca una tarea terminal (página final sin formulario).
/// Inmutable tras la carga; el código conserva su forma original — la
/// normalización (mayúsculas, trim) ocurre sólo al derivar hashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: String,
    code: Option<String>,
    timeout_minutes: Option<u32>,
    body_html: String,
}

impl Task {
    pub fn from_record(record: &Record) -> Result<Self, DomainError> {
        // Un `code:` en blanco parsea como lista vacía, nunca como escalar
        // vacío: un escalar presente siempre tiene contenido.
        let code = record.scalar("code").map(str::to_string);
        let timeout_minutes = record.integer("timeout_minutes")?;
        Ok(Task { id: record.id.clone(),
                  code,
                  timeout_minutes,
                  body_html: render_markdown(&record.body) })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn timeout_minutes(&self) -> Option<u32> {
        self.timeout_minutes
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    /// Una tarea sin código sólo puede ocupar la última posición de una
    /// secuencia (no hay código con el que abrir la página siguiente).
    pub fn is_terminal(&self) -> bool {
        self.code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_record;

    #[test]
    fn task_with_code_and_timeout() {
        let rec = parse_record("fuente", "code: gnomo42\ntimeout_minutes: 30\n\nBusca el gnomo.").unwrap();
        let task = Task::from_record(&rec).unwrap();
        assert_eq!(task.id(), "fuente");
        assert_eq!(task.code(), Some("gnomo42"));
        assert_eq!(task.timeout_minutes(), Some(30));
        assert!(!task.is_terminal());
        assert!(task.body_html().contains("gnomo"));
    }

    #[test]
    fn task_without_code_is_terminal() {
        let rec = parse_record("final", "\n¡Habéis llegado!").unwrap();
        let task = Task::from_record(&rec).unwrap();
        assert!(task.is_terminal());
    }

    #[test]
    fn blank_code_value_means_no_code() {
        let rec = parse_record("t", "code:  \n\ncuerpo").unwrap();
        // `code:` con valor en blanco abre una lista, no un escalar vacío,
        // así que la tarea simplemente no tiene código.
        let task = Task::from_record(&rec).unwrap();
        assert!(task.is_terminal());
    }
}
