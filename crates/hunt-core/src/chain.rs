//! Construcción determinista de la cadena de páginas de un equipo.
//!
//! Cada página sabe dos cosas: el hash del código que la desbloquea y el
//! nombre del archivo de la página siguiente. El nombre de una página es una
//! función pura del código que da acceso a ella (content-addressing), por lo
//! que códigos idénticos producen nombres idénticos en cualquier punto del
//! sistema.
//!
//! Invariantes:
//! - `secret_hash` presente si y sólo si la página no es terminal.
//! - `next_file` del paso i == `file` del paso i+1; la página de inicio
//!   enlaza con el paso 1 vía el código de inicio del equipo.

use std::collections::BTreeMap;

use serde::Serialize;

use hunt_domain::{Task, Team};

use crate::errors::ChainError;
use crate::hashing::{hash_value, normalize_code, page_name, secret_hash};

/// Identidad de una página dentro de la cadena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageKind {
    /// Página de bienvenida del equipo (siempre `index.html`).
    Start,
    /// Página de la tarea en una posición de la secuencia.
    Task { task_id: String },
}

/// Especificación derivada de una página estática. Nunca se muta: la
/// generación la consume tal cual.
#[derive(Debug, Clone, Serialize)]
pub struct ChainPage {
    pub team_id: String,
    /// 0 = página de inicio; 1..=N las posiciones de la secuencia.
    pub step: usize,
    pub kind: PageKind,
    /// Nombre físico del archivo dentro del directorio del equipo.
    pub file: String,
    /// SHA-256 del código que hay que enviar aquí para avanzar.
    pub secret_hash: Option<String>,
    /// Archivo de la página siguiente; `None` sólo en la terminal.
    pub next_file: Option<String>,
    /// Minutos de cuenta atrás efectivos (override de la tarea o default).
    pub timeout_minutes: Option<u32>,
    pub is_terminal: bool,
}

/// Cadena completa de un equipo: página de inicio + una página por posición.
#[derive(Debug, Clone, Serialize)]
pub struct TeamChain {
    pub team_id: String,
    pub pages: Vec<ChainPage>,
    /// Hash agregado de (archivo, secreto, siguiente) en orden: permite
    /// comparar dos builds sin mirar archivo a archivo.
    pub fingerprint: String,
}

impl TeamChain {
    pub fn start(&self) -> &ChainPage {
        &self.pages[0]
    }

    pub fn steps(&self) -> &[ChainPage] {
        &self.pages[1..]
    }
}

/// Recorre la secuencia del equipo y produce su cadena de páginas.
///
/// La posición 0 se abre con el código de inicio del equipo; la posición i>0
/// con el código de la tarea en i-1. El secreto de la posición i es el código
/// de la tarea en i, omitido en la última posición (página terminal).
pub fn build_team_chain(team: &Team,
                        tasks: &BTreeMap<String, Task>,
                        default_timeout: Option<u32>)
                        -> Result<TeamChain, ChainError> {
    let team_id = team.id().to_string();
    if team.sequence().is_empty() {
        return Err(ChainError::EmptySequence { team: team_id });
    }
    if normalize_code(team.start_code()).is_empty() {
        return Err(ChainError::EmptyStartCode { team: team_id });
    }

    // Resolver todas las referencias antes de derivar nada: una referencia
    // rota aborta la generación, nunca produce una cadena parcial.
    let mut resolved: Vec<&Task> = Vec::with_capacity(team.sequence().len());
    for (position, task_id) in team.sequence().iter().enumerate() {
        let task = tasks.get(task_id).ok_or_else(|| ChainError::UnknownTask { team: team_id.clone(),
                                                                              task: task_id.clone(),
                                                                              position })?;
        resolved.push(task);
    }

    let last = resolved.len() - 1;
    for (position, task) in resolved.iter().enumerate().take(last) {
        match task.code() {
            Some(code) if !normalize_code(code).is_empty() => {}
            _ => {
                return Err(ChainError::MissingCode { team: team_id.clone(),
                                                     task: task.id().to_string(),
                                                     position });
            }
        }
    }

    let mut pages: Vec<ChainPage> = Vec::with_capacity(resolved.len() + 1);
    let first_file = page_file(team.start_code());
    pages.push(ChainPage { team_id: team_id.clone(),
                           step: 0,
                           kind: PageKind::Start,
                           file: "index.html".to_string(),
                           secret_hash: Some(secret_hash(team.start_code())),
                           next_file: Some(first_file.clone()),
                           timeout_minutes: None,
                           is_terminal: false });

    for (position, task) in resolved.iter().enumerate() {
        let is_terminal = position == last;
        // Código que da acceso a esta página: el de la tarea anterior, o el
        // código de inicio para la posición 0.
        let file = if position == 0 {
            first_file.clone()
        } else {
            // Posiciones < last ya validadas con código presente.
            page_file(resolved[position - 1].code().unwrap_or_default())
        };
        let (secret, next) = if is_terminal {
            (None, None)
        } else {
            let code = task.code().unwrap_or_default();
            (Some(secret_hash(code)), Some(page_file(code)))
        };
        pages.push(ChainPage { team_id: team_id.clone(),
                               step: position + 1,
                               kind: PageKind::Task { task_id: task.id().to_string() },
                               file,
                               secret_hash: secret,
                               next_file: next,
                               timeout_minutes: if is_terminal {
                                   None
                               } else {
                                   task.timeout_minutes().or(default_timeout)
                               },
                               is_terminal });
    }

    let fingerprint = chain_fingerprint(&team_id, &pages);
    Ok(TeamChain { team_id, pages, fingerprint })
}

fn page_file(code: &str) -> String {
    format!("{}.html", page_name(code))
}

fn chain_fingerprint(team_id: &str, pages: &[ChainPage]) -> String {
    let rows: Vec<serde_json::Value> =
        pages.iter()
             .map(|p| serde_json::json!([p.file, p.secret_hash, p.next_file]))
             .collect();
    hash_value(&serde_json::json!({ "team": team_id, "pages": rows }))
}
