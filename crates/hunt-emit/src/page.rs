//! Render de una página de la cadena (inicio o tarea) a HTML autocontenido.
//!
//! La configuración por página viaja en un bloque JSON embebido
//! (`<script type="application/json">`) que el runtime lee al cargar. Ahí va
//! el hash del secreto, el archivo siguiente, el temporizador y la
//! penalización; nunca un código en claro.

use hunt_core::chain::{ChainPage, PageKind, TeamChain};
use hunt_domain::{HuntSettings, Team};
use serde_json::json;

/// Escapado HTML mínimo para texto procedente del contenido (nombres,
/// títulos). Los cuerpos ya vienen renderizados desde markdown.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Configuración embebida de la página, como JSON estable.
fn page_config(team: &Team,
               chain: &TeamChain,
               page: &ChainPage,
               settings: &HuntSettings,
               version: &str)
               -> String {
    let task_id = match &page.kind {
        PageKind::Start => None,
        PageKind::Task { task_id } => Some(task_id.as_str()),
    };
    let organizers: Vec<serde_json::Value> =
        settings.organizers
                .iter()
                .map(|o| {
                    json!({
                        "name": o.name,
                        "phone": o.phone,
                        "telegram": o.telegram,
                        "whatsapp": o.whatsapp,
                    })
                })
                .collect();
    // Las claves se ordenan vía canonical_json para que el archivo emitido
    // sea byte-idéntico entre ejecuciones.
    hunt_core::to_canonical_json(&json!({
        "version": version,
        "team": team.id(),
        "teamName": team.display_name(),
        "step": page.step,
        "stepCount": chain.steps().len(),
        "taskId": task_id,
        "secret": page.secret_hash,
        "next": page.next_file,
        "timeoutMinutes": page.timeout_minutes,
        "penaltyMinutes": settings.penalty_minutes(),
        "trackerUrl": settings.tracker_url,
        "terminal": page.is_terminal,
    }))
}

fn help_section(settings: &HuntSettings) -> String {
    let mut contacts = String::new();
    for o in &settings.organizers {
        let mut links = String::new();
        if let Some(phone) = &o.phone {
            links.push_str(&format!(" <a href=\"tel:{0}\">{0}</a>", escape_html(phone)));
        }
        if let Some(tg) = &o.telegram {
            links.push_str(&format!(" <a href=\"https://t.me/{0}\">@{0}</a>", escape_html(tg)));
        }
        if let Some(wa) = &o.whatsapp {
            links.push_str(&format!(" <a href=\"https://wa.me/{0}\">WhatsApp</a>", escape_html(wa)));
        }
        contacts.push_str(&format!("      <li>{}{}</li>\n", escape_html(&o.name), links));
    }
    format!(
        r#"  <section id="help" class="help" hidden>
    <p>El tiempo se ha agotado. Podéis pedir la respuesta a la organización, con penalización.</p>
    <button id="help-btn" type="button">Pedir la respuesta (+{} min)</button>
    <ul id="contacts" hidden>
{}    </ul>
  </section>
"#,
        settings.penalty_minutes(),
        contacts
    )
}

/// Página completa de un paso de la cadena. Para la página de inicio el
/// cuerpo es la bienvenida del equipo; para las demás, la tarea.
pub fn render_chain_page(team: &Team,
                         chain: &TeamChain,
                         page: &ChainPage,
                         body_html: &str,
                         settings: &HuntSettings,
                         version: &str)
                         -> String {
    let title = escape_html(team.display_name());
    let progress = match page.kind {
        PageKind::Start => "Punto de partida".to_string(),
        PageKind::Task { .. } if page.is_terminal => format!("Final del recorrido — {} pasos", chain.steps().len()),
        PageKind::Task { .. } => format!("Paso {} de {}", page.step, chain.steps().len()),
    };
    let form = if page.is_terminal {
        String::new()
    } else {
        r#"  <form id="code-form" class="code" autocomplete="off">
    <input id="code-input" type="text" placeholder="CÓDIGO" aria-label="código" required>
    <button type="submit">Comprobar</button>
  </form>
  <p id="code-error" class="error" hidden>Código incorrecto.</p>
"#
        .to_string()
    };
    let help = if page.timeout_minutes.is_some() { help_section(settings) } else { String::new() };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="robots" content="noindex, nofollow">
<title>{title}</title>
<link rel="stylesheet" href="../static/hunt.css">
</head>
<body>
<main class="page">
  <header>
    <div id="countdown" class="countdown" hidden></div>
    <h1>{title}</h1>
    <p class="progress">{progress}</p>
    <p id="penalty" class="penalty" hidden></p>
  </header>
  <section class="body">
{body_html}
  </section>
{form}{help}</main>
<script id="hunt-config" type="application/json">{config}</script>
<script src="../static/hunt.js"></script>
</body>
</html>
"#,
        title = title,
        progress = progress,
        body_html = body_html,
        form = form,
        help = help,
        config = page_config(team, chain, page, settings, version),
    )
}
