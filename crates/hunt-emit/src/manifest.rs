//! Manifiesto de contraste para el operador: cada código y cada URL, en
//! claro y en texto plano. Se escribe FUERA del árbol publicable; es el
//! material de pruebas del operador y nunca debe acompañar a las páginas de
//! los jugadores.

use hunt_core::chain::PageKind;

use crate::errors::EmitError;
use crate::SiteModel;

pub fn render_manifest(model: &SiteModel) -> Result<String, EmitError> {
    let mut out = String::new();
    out.push_str("# Manifiesto de pruebas\n\n");
    out.push_str(&format!("Versión del build: `{}`\n\n", model.version));
    out.push_str("NO publicar este archivo: contiene todos los códigos en claro.\n\n");

    for (team_id, chain) in model.chains {
        let team = model.teams
                        .get(team_id)
                        .ok_or_else(|| EmitError::InconsistentModel { detail: format!("cadena sin equipo '{team_id}'") })?;
        out.push_str(&format!("## {} (`{}`)\n\n", team.display_name(), team_id));
        out.push_str(&format!("- Código de inicio: `{}`\n", team.start_code()));
        out.push_str(&format!("- Huella de la cadena: `{}`\n\n", chain.fingerprint));
        out.push_str("| Paso | Página | URL | Código a enviar |\n");
        out.push_str("|------|--------|-----|------------------|\n");
        for page in &chain.pages {
            let label = match &page.kind {
                PageKind::Start => "inicio",
                PageKind::Task { task_id } => task_id.as_str(),
            };
            let code = if page.is_terminal {
                "—".to_string()
            } else {
                let submit = match &page.kind {
                    PageKind::Start => Some(team.start_code().to_string()),
                    PageKind::Task { task_id } => {
                        model.tasks
                             .get(task_id)
                             .ok_or_else(|| EmitError::InconsistentModel { detail: format!("página sin tarea '{task_id}'") })?
                             .code()
                             .map(str::to_string)
                    }
                };
                submit.map(|c| format!("`{c}`")).unwrap_or_else(|| "—".to_string())
            };
            out.push_str(&format!("| {} | {} | {}/{} | {} |\n", page.step, label, team_id, page.file, code));
        }
        out.push('\n');
    }
    Ok(out)
}
