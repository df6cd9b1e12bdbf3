//! Páginas de portada e índices de operador.
//!
//! Los índices de operador van tras una puerta de contraseña comparada por
//! su derivación de secreto en el navegador. Es ofuscación de presentación:
//! el hash y el contenido viajan en el documento. No es un límite de
//! seguridad y no pretende serlo.

use hunt_core::chain::PageKind;
use hunt_core::secret_hash;

use crate::errors::EmitError;
use crate::page::escape_html;
use crate::SiteModel;

/// Portada pública: no enlaza con ninguna página de equipo.
pub fn render_landing() -> String {
    shell("La búsqueda",
          "static/hunt.css",
          r#"  <section class="body">
    <p>La búsqueda está en marcha. Si formas parte de un equipo, usa el enlace que os entregó la organización.</p>
  </section>
"#
          .to_string())
}

/// Índice de operador: URL de inicio de cada equipo.
pub fn render_admin_index(model: &SiteModel) -> String {
    let mut rows = String::new();
    for (team_id, team) in model.teams {
        rows.push_str(&format!("      <tr><td>{}</td><td><a href=\"../{}/index.html\"><code>{}/index.html</code></a></td></tr>\n",
                               escape_html(team.display_name()),
                               team_id,
                               team_id));
    }
    let content = format!(
        r#"  <h2>Equipos</h2>
  <table class="listing">
    <thead><tr><th>Equipo</th><th>Página de inicio</th></tr></thead>
    <tbody>
{rows}    </tbody>
  </table>
"#
    );
    gated_page("Operación", model, content)
}

/// Índice de pruebas: todos los códigos y todas las URLs resultantes.
/// Contiene todos los secretos en claro; nunca debe publicarse junto a las
/// páginas de los jugadores.
pub fn render_testing_index(model: &SiteModel) -> Result<String, EmitError> {
    let mut sections = String::new();
    for (team_id, chain) in model.chains {
        let team = model.teams
                        .get(team_id)
                        .ok_or_else(|| EmitError::InconsistentModel { detail: format!("cadena sin equipo '{team_id}'") })?;
        sections.push_str(&format!("  <h2>{} (inicio: <code>{}</code>)</h2>\n",
                                   escape_html(team.display_name()),
                                   escape_html(team.start_code())));
        sections.push_str("  <table class=\"listing\">\n    <thead><tr><th>Paso</th><th>Tarea</th><th>Código a enviar</th><th>URL</th></tr></thead>\n    <tbody>\n");
        for page in &chain.pages {
            let (label, code) = match &page.kind {
                PageKind::Start => ("inicio".to_string(), Some(team.start_code().to_string())),
                PageKind::Task { task_id } => {
                    let task = model.tasks
                                    .get(task_id)
                                    .ok_or_else(|| EmitError::InconsistentModel { detail: format!("página sin tarea '{task_id}'") })?;
                    (task_id.clone(), task.code().map(str::to_string))
                }
            };
            let code_cell = match (page.is_terminal, code) {
                (true, _) | (_, None) => "—".to_string(),
                (false, Some(c)) => format!("<code>{}</code>", escape_html(&c)),
            };
            sections.push_str(&format!("      <tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"../{}/{}\"><code>{}/{}</code></a></td></tr>\n",
                                       page.step,
                                       escape_html(&label),
                                       code_cell,
                                       team_id,
                                       page.file,
                                       team_id,
                                       page.file));
        }
        sections.push_str("    </tbody>\n  </table>\n");
    }
    Ok(gated_page("Pruebas", model, sections))
}

/// Envuelve contenido de operador tras la puerta de contraseña. Sin
/// `admin_password` configurada, el contenido se emite visible.
fn gated_page(title: &str, model: &SiteModel, content: String) -> String {
    let body = match &model.settings.admin_password {
        None => content,
        Some(password) => {
            let hash = secret_hash(password);
            format!(
                r#"  <section id="gate">
    <form id="gate-form" class="code gate">
      <input id="gate-input" type="password" placeholder="Contraseña" aria-label="contraseña" required>
      <button type="submit">Entrar</button>
    </form>
    <p id="gate-error" class="error" hidden>Contraseña incorrecta.</p>
  </section>
  <div id="gated" hidden>
{content}  </div>
<script>
(function () {{
  "use strict";
  var HASH = "{hash}";
  function sha256hex(text) {{
    var data = new TextEncoder().encode(text);
    return crypto.subtle.digest("SHA-256", data).then(function (buf) {{
      return Array.from(new Uint8Array(buf)).map(function (b) {{
        return b.toString(16).padStart(2, "0");
      }}).join("");
    }});
  }}
  document.getElementById("gate-form").addEventListener("submit", function (ev) {{
    ev.preventDefault();
    var input = document.getElementById("gate-input");
    sha256hex(input.value.trim().toUpperCase()).then(function (hash) {{
      if (hash === HASH) {{
        document.getElementById("gate").hidden = true;
        document.getElementById("gated").hidden = false;
      }} else {{
        input.value = "";
        var error = document.getElementById("gate-error");
        error.hidden = false;
        setTimeout(function () {{ error.hidden = true; }}, 2500);
      }}
    }});
  }});
}})();
</script>
"#
            )
        }
    };
    shell(title, "../static/hunt.css", body)
}

fn shell(title: &str, css_href: &str, body: String) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="robots" content="noindex, nofollow">
<title>{title}</title>
<link rel="stylesheet" href="{css_href}">
</head>
<body>
<main class="page">
  <header><h1>{title}</h1></header>
{body}</main>
</body>
</html>
"#,
        title = escape_html(title),
        css_href = css_href,
        body = body,
    )
}
