//! Estado en memoria del colector: último estado por equipo + registro
//! append-only de eventos, con fan-out best-effort a los suscriptores.
//!
//! Invariante de monotonía: el paso registrado de un equipo nunca retrocede.
//! Una notificación con un paso menor que el almacenado (reenvío tardío,
//! llegada desordenada) se confirma pero se descarta sin aplicar.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Notificación entrante desde el runtime de un jugador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub team_id: String,
    #[serde(default)]
    pub team_name: Option<String>,
    pub step: usize,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub penalty_minutes: Option<u32>,
}

/// Evento almacenado en el registro (metadatos asignados por el colector).
#[derive(Debug, Clone, Serialize)]
pub struct StoredEvent {
    pub id: Uuid,
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// Último estado conocido de un equipo.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStatus {
    pub team_id: String,
    pub team_name: String,
    pub step: usize,
    pub task_id: Option<String>,
    pub location: Option<String>,
    pub penalty_minutes: u32,
    pub finished: bool,
    pub updated_at: DateTime<Utc>,
}

struct TrackerInner {
    teams: BTreeMap<String, TeamStatus>,
    log: Vec<StoredEvent>,
}

pub struct TrackerState {
    inner: Mutex<TrackerInner>,
    tx: broadcast::Sender<String>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerState {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        TrackerState { inner: Mutex::new(TrackerInner { teams: BTreeMap::new(), log: Vec::new() }), tx }
    }

    /// Aplica una notificación. Devuelve `false` si se descartó por la regla
    /// de monotonía; la ingesta nunca falla ni bloquea por suscriptores
    /// lentos (un receptor rezagado pierde mensajes, no frena al emisor).
    pub fn ingest(&self, payload: EventPayload) -> bool {
        let event = {
            let mut inner = match self.inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let status = inner.teams
                              .entry(payload.team_id.clone())
                              .or_insert_with(|| TeamStatus { team_id: payload.team_id.clone(),
                                                              team_name: String::new(),
                                                              step: 0,
                                                              task_id: None,
                                                              location: None,
                                                              penalty_minutes: 0,
                                                              finished: false,
                                                              updated_at: Utc::now() });
            if payload.step < status.step {
                return false;
            }
            status.step = payload.step;
            status.updated_at = Utc::now();
            if let Some(name) = &payload.team_name {
                status.team_name = name.clone();
            }
            if payload.task_id.is_some() {
                status.task_id = payload.task_id.clone();
            }
            if payload.location.is_some() {
                status.location = payload.location.clone();
            }
            match payload.kind.as_str() {
                "penalty" => status.penalty_minutes += payload.penalty_minutes.unwrap_or(0),
                "finish" => status.finished = true,
                _ => {}
            }
            let stored = StoredEvent { id: Uuid::new_v4(), ts: Utc::now(), payload };
            inner.log.push(stored.clone());
            json!({ "event": stored, "teams": snapshot_of(&inner) }).to_string()
        };
        let _ = self.tx.send(event);
        true
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Vec<TeamStatus> {
        let inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        snapshot_of(&inner)
    }

    pub fn event_count(&self) -> usize {
        let inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.log.len()
    }

    /// Vacía todo el historial y el estado por equipo.
    pub fn reset(&self) {
        {
            let mut inner = match self.inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            inner.teams.clear();
            inner.log.clear();
        }
        let _ = self.tx.send(json!({ "event": null, "teams": [] }).to_string());
    }
}

fn snapshot_of(inner: &TrackerInner) -> Vec<TeamStatus> {
    inner.teams.values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, team: &str, step: usize) -> EventPayload {
        EventPayload { kind: kind.to_string(),
                       team_id: team.to_string(),
                       team_name: Some(format!("Equipo {team}")),
                       step,
                       task_id: None,
                       location: None,
                       penalty_minutes: None }
    }

    #[test]
    fn step_never_regresses() {
        let state = TrackerState::new();
        assert!(state.ingest(event("step", "rojo", 1)));
        assert!(state.ingest(event("step", "rojo", 3)));
        // Notificación tardía con paso menor: descartada.
        assert!(!state.ingest(event("step", "rojo", 2)));
        let snap = state.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].step, 3);
        // El registro sólo contiene los eventos aplicados.
        assert_eq!(state.event_count(), 2);
    }

    #[test]
    fn penalty_accumulates_per_team() {
        let state = TrackerState::new();
        let mut p = event("penalty", "azul", 2);
        p.penalty_minutes = Some(15);
        assert!(state.ingest(p.clone()));
        assert!(state.ingest(p));
        assert_eq!(state.snapshot()[0].penalty_minutes, 30);
    }

    #[test]
    fn finish_marks_team() {
        let state = TrackerState::new();
        state.ingest(event("step", "rojo", 4));
        state.ingest(event("finish", "rojo", 4));
        let snap = state.snapshot();
        assert!(snap[0].finished);
    }

    #[test]
    fn equal_step_is_applied() {
        let state = TrackerState::new();
        assert!(state.ingest(event("step", "rojo", 2)));
        // El mismo paso vuelve a aplicarse (reintento idempotente del cliente).
        assert!(state.ingest(event("step", "rojo", 2)));
    }

    #[test]
    fn teams_are_independent() {
        let state = TrackerState::new();
        state.ingest(event("step", "rojo", 5));
        assert!(state.ingest(event("step", "azul", 1)));
        let snap = state.snapshot();
        assert_eq!(snap.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let state = TrackerState::new();
        state.ingest(event("step", "rojo", 2));
        state.reset();
        assert!(state.snapshot().is_empty());
        assert_eq!(state.event_count(), 0);
        // Tras el reset, un paso "menor" vuelve a ser válido.
        assert!(state.ingest(event("step", "rojo", 1)));
    }

    #[test]
    fn ingest_does_not_block_without_subscribers() {
        let state = TrackerState::new();
        for i in 0..600 {
            assert!(state.ingest(event("step", "rojo", i)));
        }
        assert_eq!(state.event_count(), 600);
    }
}
