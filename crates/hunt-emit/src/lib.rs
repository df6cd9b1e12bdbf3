//! hunt-emit: emisión del árbol estático de páginas.
//!
//! Consume las cadenas derivadas por `hunt-core` y el contenido de
//! `hunt-domain`, y escribe un árbol autocontenido: una carpeta por equipo,
//! activos compartidos, portada pública e índices de operador. La emisión es
//! determinista: el mismo contenido produce bytes idénticos.

pub mod assets;
pub mod errors;
pub mod manifest;
pub mod page;
pub mod site;
pub mod writer;

use std::collections::BTreeMap;
use std::path::Path;

use hunt_core::chain::{PageKind, TeamChain};
use hunt_domain::{HuntSettings, Task, Team};

pub use errors::EmitError;
pub use manifest::render_manifest;
pub use writer::OutputWriter;

/// Vista inmutable de todo lo necesario para emitir el sitio. Se construye
/// una vez por generación y se pasa por referencia a cada render.
pub struct SiteModel<'a> {
    pub settings: &'a HuntSettings,
    pub teams: &'a BTreeMap<String, Team>,
    pub tasks: &'a BTreeMap<String, Task>,
    pub chains: &'a BTreeMap<String, TeamChain>,
    /// Token de versión del build: invalida estado de sesión del navegador
    /// tras un redeploy, sin afectar nombres ni secretos.
    pub version: &'a str,
}

/// Borra y reconstruye el árbol de salida completo. Devuelve el número de
/// páginas de juego escritas.
pub fn emit_site(model: &SiteModel, out_dir: &Path) -> Result<usize, EmitError> {
    let writer = OutputWriter::reset(out_dir)?;

    writer.write("static/hunt.css", assets::HUNT_CSS)?;
    writer.write("static/hunt.js", assets::HUNT_JS)?;
    writer.write("index.html", &site::render_landing())?;
    writer.write("admin/index.html", &site::render_admin_index(model))?;
    writer.write("admin/testing.html", &site::render_testing_index(model)?)?;

    let mut pages = 0usize;
    for (team_id, chain) in model.chains {
        let team = model.teams
                        .get(team_id)
                        .ok_or_else(|| EmitError::InconsistentModel { detail: format!("cadena sin equipo '{team_id}'") })?;
        for chain_page in &chain.pages {
            let body_html = match &chain_page.kind {
                PageKind::Start => team.welcome_html(),
                PageKind::Task { task_id } => {
                    model.tasks
                         .get(task_id)
                         .ok_or_else(|| EmitError::InconsistentModel { detail: format!("página sin tarea '{task_id}'") })?
                         .body_html()
                }
            };
            let html = page::render_chain_page(team, chain, chain_page, body_html, model.settings, model.version);
            writer.write(&format!("{}/{}", team_id, chain_page.file), &html)?;
            pages += 1;
        }
    }
    Ok(pages)
}
