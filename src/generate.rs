//! Orquestación de una generación completa: cargar contenido, validar,
//! derivar cadenas, emitir el árbol y el manifiesto.
//!
//! Una sola pasada, un solo hilo, sin estado compartido entre equipos. Los
//! errores de configuración abortan el build entero; las advertencias
//! (contenido muerto, colisiones de nombre) se acumulan en el reporte y no
//! detienen nada.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use hunt_core::chain::TeamChain;
use hunt_core::constants::GENERATOR_VERSION;
use hunt_core::{build_team_chain, hash_value};
use hunt_domain::{parse_record, HuntSettings, Record, Task, Team};
use hunt_emit::{emit_site, render_manifest, SiteModel};

use crate::errors::BuildError;

/// Resultado de una generación correcta.
#[derive(Debug)]
pub struct BuildReport {
    /// Token de versión del build (16 hex): cambia cuando cambia el
    /// contenido; lo usa el navegador para invalidar temporizadores.
    pub version: String,
    pub teams: usize,
    pub pages: usize,
    pub warnings: Vec<String>,
    /// Huella de cadena por equipo, para comparar builds entre sí.
    pub fingerprints: BTreeMap<String, String>,
}

/// Genera el sitio completo. `content_dir` debe contener `tasks/`, `teams/`
/// y opcionalmente `hunt.conf`; `out_dir` se borra y reconstruye; el
/// manifiesto se escribe en `manifest_path`, fuera del árbol publicable.
pub fn build_site(content_dir: &Path, out_dir: &Path, manifest_path: &Path) -> Result<BuildReport, BuildError> {
    let mut warnings: Vec<String> = Vec::new();

    let tasks: BTreeMap<String, Task> = load_records(&content_dir.join("tasks"))?
        .iter()
        .map(|rec| Task::from_record(rec).map(|t| (t.id().to_string(), t)))
        .collect::<Result<_, _>>()?;
    let teams: BTreeMap<String, Team> = load_records(&content_dir.join("teams"))?
        .iter()
        .map(|rec| Team::from_record(rec).map(|t| (t.id().to_string(), t)))
        .collect::<Result<_, _>>()?;
    let settings = load_settings(&content_dir.join("hunt.conf"))?;

    // Contenido muerto: tareas que ningún equipo recorre.
    let referenced: BTreeSet<&str> =
        teams.values().flat_map(|t| t.sequence().iter().map(String::as_str)).collect();
    for id in tasks.keys() {
        if !referenced.contains(id.as_str()) {
            warnings.push(format!("la tarea '{id}' no está referenciada por ningún equipo"));
        }
    }

    let mut chains: BTreeMap<String, TeamChain> = BTreeMap::new();
    for team in teams.values() {
        let chain = build_team_chain(team, &tasks, settings.default_timeout_minutes)?;
        // Códigos repetidos dentro de un mismo recorrido colisionan sobre el
        // mismo archivo físico (content-addressing): la última página
        // emitida gana. Se avisa, no se corrige.
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for page in &chain.pages {
            if !seen.insert(page.file.as_str()) {
                warnings.push(format!("equipo '{}': el archivo '{}' aparece más de una vez en la cadena",
                                      team.id(),
                                      page.file));
            }
        }
        chains.insert(team.id().to_string(), chain);
    }

    let fingerprints: BTreeMap<String, String> =
        chains.iter().map(|(id, c)| (id.clone(), c.fingerprint.clone())).collect();
    let version = hash_value(&json!({ "generator": GENERATOR_VERSION, "chains": fingerprints }))[..16].to_string();

    let model = SiteModel { settings: &settings,
                            teams: &teams,
                            tasks: &tasks,
                            chains: &chains,
                            version: &version };
    let pages = emit_site(&model, out_dir)?;

    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    let manifest = render_manifest(&model)?;
    fs::write(manifest_path, manifest).map_err(|e| BuildError::io(manifest_path, e))?;

    Ok(BuildReport { version, teams: teams.len(), pages, warnings, fingerprints })
}

/// Lee todos los `.md` de un directorio, en orden estable por nombre. El id
/// de cada registro es el nombre del archivo sin extensión.
fn load_records(dir: &Path) -> Result<Vec<Record>, BuildError> {
    if !dir.is_dir() {
        return Err(BuildError::MissingContentDir { path: dir.display().to_string() });
    }
    let mut paths: Vec<PathBuf> = fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))?
                                                   .collect::<Result<Vec<_>, _>>()
                                                   .map_err(|e| BuildError::io(dir, e))?
                                                   .into_iter()
                                                   .map(|entry| entry.path())
                                                   .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
                                                   .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        let text = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        records.push(parse_record(&id, &text)?);
    }
    Ok(records)
}

fn load_settings(path: &Path) -> Result<HuntSettings, BuildError> {
    if !path.is_file() {
        return Ok(HuntSettings::default());
    }
    let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    let record = parse_record("hunt.conf", &text)?;
    Ok(HuntSettings::from_record(&record)?)
}
