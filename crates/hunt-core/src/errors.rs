//! Errores de construcción de cadenas. Todos son errores fatales de
//! configuración: abortan la generación completa (stop-on-failure).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ChainError {
    #[error("equipo '{team}': la secuencia está vacía")]
    EmptySequence { team: String },

    #[error("equipo '{team}': código de inicio vacío")]
    EmptyStartCode { team: String },

    #[error("equipo '{team}': tarea desconocida '{task}' en posición {position}")]
    UnknownTask { team: String, task: String, position: usize },

    #[error("equipo '{team}': la tarea '{task}' en posición no terminal {position} no tiene código")]
    MissingCode { team: String, task: String, position: usize },
}
