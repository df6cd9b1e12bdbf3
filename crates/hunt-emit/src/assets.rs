//! Activos compartidos del sitio generado: hoja de estilos y runtime del
//! navegador. Son constantes: el mismo build produce siempre los mismos
//! bytes, y toda variación por página viaja en el bloque de configuración
//! incrustado, nunca en estos archivos.

/// Hoja de estilos compartida.
pub const HUNT_CSS: &str = r##"/* hunt.css */
:root {
  --fondo: #11151c;
  --tarjeta: #1b2230;
  --texto: #e8e8e8;
  --acento: #e0a43a;
  --error: #d9534f;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--fondo);
  color: var(--texto);
  font-family: Georgia, "Times New Roman", serif;
  line-height: 1.5;
}
main.page {
  max-width: 42rem;
  margin: 0 auto;
  padding: 1.5rem 1rem 3rem;
}
header h1 { color: var(--acento); margin-bottom: 0.25rem; }
.progress { opacity: 0.7; font-size: 0.9rem; margin-bottom: 1rem; }
.countdown {
  float: right;
  font-variant-numeric: tabular-nums;
  background: var(--tarjeta);
  padding: 0.2rem 0.6rem;
  border-radius: 0.3rem;
}
.penalty { color: var(--error); font-weight: bold; }
section.body {
  background: var(--tarjeta);
  padding: 1rem 1.25rem;
  border-radius: 0.5rem;
}
section.body img { max-width: 100%; }
form.code {
  margin-top: 1.5rem;
  display: flex;
  gap: 0.5rem;
}
form.code input {
  flex: 1;
  padding: 0.6rem;
  font-size: 1.1rem;
  text-transform: uppercase;
  border-radius: 0.3rem;
  border: 1px solid #444;
  background: #0d1016;
  color: var(--texto);
}
form.code button, .help button, form.gate button {
  padding: 0.6rem 1.2rem;
  font-size: 1rem;
  border: none;
  border-radius: 0.3rem;
  background: var(--acento);
  color: #11151c;
  cursor: pointer;
}
.help button:disabled { opacity: 0.4; cursor: default; }
.error { color: var(--error); }
.help {
  margin-top: 1.5rem;
  border: 1px dashed var(--acento);
  border-radius: 0.5rem;
  padding: 1rem;
}
.help ul { list-style: none; padding: 0; }
.help a { color: var(--acento); }
table.listing { border-collapse: collapse; width: 100%; }
table.listing th, table.listing td {
  border-bottom: 1px solid #333;
  padding: 0.4rem 0.6rem;
  text-align: left;
}
code { background: #0d1016; padding: 0.1rem 0.3rem; border-radius: 0.2rem; }
"##;

/// Runtime de verificación del jugador.
///
/// Máquina de estados: esperando → comprobando → aceptado | rechazado. El
/// secreto incrustado sólo se compara contra el SHA-256 del envío
/// normalizado; el código en claro nunca está en la página. La cuenta atrás
/// y la penalización viven en sessionStorage con claves por
/// (versión, equipo, paso): subir la versión del build las invalida.
pub const HUNT_JS: &str = r##"// hunt.js — runtime del jugador
(function () {
  "use strict";

  var cfgEl = document.getElementById("hunt-config");
  if (!cfgEl) { return; }
  var cfg = JSON.parse(cfgEl.textContent);

  function normalize(code) { return code.trim().toUpperCase(); }

  function sha256hex(text) {
    var data = new TextEncoder().encode(text);
    return crypto.subtle.digest("SHA-256", data).then(function (buf) {
      return Array.from(new Uint8Array(buf)).map(function (b) {
        return b.toString(16).padStart(2, "0");
      }).join("");
    });
  }

  function teamKey(suffix) { return "hunt:" + cfg.version + ":" + cfg.team + ":" + suffix; }
  function stepKey(suffix) { return teamKey(cfg.step + ":" + suffix); }

  // Notificación fire-and-forget al colector; cualquier fallo se ignora:
  // el juego es completamente jugable sin conectividad.
  function notify(type, extra) {
    if (!cfg.trackerUrl) { return; }
    var payload = {
      type: type,
      team_id: cfg.team,
      team_name: cfg.teamName,
      step: cfg.step,
      task_id: cfg.taskId || null
    };
    if (extra) { for (var k in extra) { payload[k] = extra[k]; } }
    try {
      fetch(cfg.trackerUrl.replace(/\/+$/, "") + "/api/event", {
        method: "POST",
        keepalive: true,
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(payload)
      }).catch(function () {});
    } catch (err) { /* sin red */ }
  }

  function accruedPenalty() {
    return parseInt(sessionStorage.getItem(teamKey("penalty")) || "0", 10);
  }

  function showPenalty() {
    var el = document.getElementById("penalty");
    var total = accruedPenalty();
    if (el && total > 0) {
      el.textContent = "Penalización acumulada: +" + total + " min";
      el.hidden = false;
    }
  }

  // --- formulario de código ---
  var form = document.getElementById("code-form");
  if (form) {
    var input = document.getElementById("code-input");
    var error = document.getElementById("code-error");
    var checking = false;
    form.addEventListener("submit", function (ev) {
      ev.preventDefault();
      if (checking) { return; }
      checking = true;
      sha256hex(normalize(input.value)).then(function (hash) {
        checking = false;
        if (hash === cfg.secret) {
          window.location.href = cfg.next;
        } else {
          input.value = "";
          error.hidden = false;
          setTimeout(function () { error.hidden = true; }, 2500);
        }
      }, function () { checking = false; });
    });
  }

  // --- ayuda con penalización ---
  function offerHelp() {
    var help = document.getElementById("help");
    if (!help) { return; }
    help.hidden = false;
    var btn = document.getElementById("help-btn");
    var contacts = document.getElementById("contacts");
    function reveal() {
      if (contacts) { contacts.hidden = false; }
      if (btn) { btn.disabled = true; }
    }
    if (sessionStorage.getItem(stepKey("helped")) === "1") {
      reveal();
      return;
    }
    if (btn) {
      btn.addEventListener("click", function () {
        if (sessionStorage.getItem(stepKey("helped")) === "1") { return; }
        sessionStorage.setItem(stepKey("helped"), "1");
        sessionStorage.setItem(teamKey("penalty"), String(accruedPenalty() + (cfg.penaltyMinutes || 0)));
        notify("penalty", { penalty_minutes: cfg.penaltyMinutes || 0 });
        reveal();
        showPenalty();
      });
    }
  }

  // --- cuenta atrás ---
  var countdown = document.getElementById("countdown");
  if (countdown && cfg.timeoutMinutes) {
    var key = stepKey("deadline");
    var deadline = parseInt(sessionStorage.getItem(key) || "0", 10);
    if (!deadline) {
      deadline = Date.now() + cfg.timeoutMinutes * 60000;
      sessionStorage.setItem(key, String(deadline));
    }
    countdown.hidden = false;
    var timer = setInterval(tick, 1000);
    function tick() {
      var left = deadline - Date.now();
      if (left <= 0) {
        clearInterval(timer);
        countdown.textContent = "00:00";
        offerHelp();
        return;
      }
      var mins = Math.floor(left / 60000);
      var secs = Math.floor((left % 60000) / 1000);
      countdown.textContent = (mins < 10 ? "0" : "") + mins + ":" + (secs < 10 ? "0" : "") + secs;
    }
    tick();
  }

  showPenalty();
  notify("step");
  if (cfg.terminal) { notify("finish"); }
})();
"##;
