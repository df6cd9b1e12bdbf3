//! Generación de extremo a extremo sobre contenido real en disco:
//! estructura del árbol, determinismo entre ejecuciones, integridad de la
//! cadena leída desde las páginas emitidas y no-exposición de códigos.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use huntflow_rust::build_site;

fn write_fixture(root: &Path) {
    let tasks = root.join("content/tasks");
    let teams = root.join("content/teams");
    fs::create_dir_all(&tasks).unwrap();
    fs::create_dir_all(&teams).unwrap();

    fs::write(tasks.join("fuente.md"), "code: gnome42\ntimeout_minutes: 20\n\nBusca el **gnomo** del jardín.").unwrap();
    fs::write(tasks.join("mirador.md"), "code: brujula7\n\nSube al mirador y mira al norte.").unwrap();
    fs::write(tasks.join("final.md"), "\n# Final\n\n¡Lo habéis conseguido!").unwrap();
    fs::write(teams.join("rojo.md"),
              "name: Equipo Rojo\nstart_code: ROJO1\nsequence:\n  - fuente\n  - mirador\n  - final\n\nBienvenidos, rojos.").unwrap();
    fs::write(teams.join("azul.md"),
              "name: Equipo Azul\nstart_code: AZUL1\nsequence:\n  - mirador\n  - final\n\nBienvenidos, azules.").unwrap();
    fs::write(root.join("content/hunt.conf"),
              "admin_password: operador9\ndefault_timeout_minutes: 45\nhint_penalty_minutes: 15\norganizers:\n  - name: Ana\n    phone: 600111222\n").unwrap();
}

fn collect_files(root: &Path) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }
    out
}

/// Extrae el bloque JSON de configuración incrustado en una página.
fn embedded_config(html: &str) -> serde_json::Value {
    let marker = r#"<script id="hunt-config" type="application/json">"#;
    let start = html.find(marker).expect("la página debe llevar configuración embebida") + marker.len();
    let end = html[start..].find("</script>").unwrap() + start;
    serde_json::from_str(&html[start..end]).unwrap()
}

#[test]
fn full_build_produces_consistent_chains() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let out = dir.path().join("dist/site");
    let manifest = dir.path().join("dist/manifest.md");

    let report = build_site(&dir.path().join("content"), &out, &manifest).unwrap();
    assert_eq!(report.teams, 2);
    // rojo: inicio + 3; azul: inicio + 2.
    assert_eq!(report.pages, 7);
    assert_eq!(report.version.len(), 16);

    // Recorrer la cadena de cada equipo siguiendo los `next` embebidos.
    for team in ["rojo", "azul"] {
        let mut file = PathBuf::from("index.html");
        let mut visited = 0;
        loop {
            let html = fs::read_to_string(out.join(team).join(&file)).unwrap();
            let cfg = embedded_config(&html);
            assert_eq!(cfg["team"], team);
            assert_eq!(cfg["version"], report.version.as_str());
            visited += 1;
            match cfg["next"].as_str() {
                Some(next) => {
                    // El secreto acompaña siempre al siguiente enlace.
                    assert!(cfg["secret"].as_str().is_some());
                    file = PathBuf::from(next);
                }
                None => {
                    assert_eq!(cfg["terminal"], true);
                    break;
                }
            }
        }
        let expected = if team == "rojo" { 4 } else { 3 };
        assert_eq!(visited, expected, "cadena de {team}");
    }

    // El manifiesto queda fuera del árbol publicable.
    assert!(manifest.exists());
    assert!(!out.join("manifest.md").exists());
}

#[test]
fn rebuild_is_byte_identical_and_destructive() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let content = dir.path().join("content");
    let out = dir.path().join("dist/site");
    let manifest = dir.path().join("dist/manifest.md");

    let first = build_site(&content, &out, &manifest).unwrap();
    let snapshot_a = collect_files(&out);

    // Archivo huérfano de un build anterior: debe desaparecer.
    fs::write(out.join("huerfano.html"), "viejo").unwrap();

    let second = build_site(&content, &out, &manifest).unwrap();
    let snapshot_b = collect_files(&out);

    assert_eq!(first.version, second.version);
    assert_eq!(first.fingerprints, second.fingerprints);
    assert_eq!(snapshot_a, snapshot_b);
    assert!(!out.join("huerfano.html").exists());
}

#[test]
fn player_pages_do_not_leak_codes() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let out = dir.path().join("dist/site");
    build_site(&dir.path().join("content"), &out, &dir.path().join("dist/manifest.md")).unwrap();

    for (rel, contents) in collect_files(&out) {
        if rel.starts_with("admin/") {
            continue;
        }
        let lowered = contents.to_lowercase();
        for code in ["gnome42", "brujula7", "rojo1", "azul1", "operador9"] {
            assert!(!lowered.contains(code), "{rel} expone {code}");
        }
    }
}

#[test]
fn unreferenced_task_is_a_warning_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(dir.path().join("content/tasks/huerfana.md"), "code: nadie1\n\nNadie pasa por aquí.").unwrap();

    let report = build_site(&dir.path().join("content"),
                            &dir.path().join("dist/site"),
                            &dir.path().join("dist/manifest.md")).unwrap();
    assert!(report.warnings.iter().any(|w| w.contains("huerfana")));
}
