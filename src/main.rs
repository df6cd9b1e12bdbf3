use std::path::Path;

use huntflow_rust::config::CONFIG;
use huntflow_rust::{build_site, BuildError};

fn main() {
    // Cargar .env si existe para las rutas por defecto
    let _ = dotenvy::dotenv();
    // CLI mínima: `huntflow build [--content <DIR>] [--out <DIR>] [--manifest <ARCHIVO>]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "build" {
        let mut content = CONFIG.content_dir.clone();
        let mut out = CONFIG.out_dir.clone();
        let mut manifest = CONFIG.manifest_path.clone();
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--content" => {
                    i += 1;
                    if i < args.len() { content = args[i].clone(); }
                }
                "--out" => {
                    i += 1;
                    if i < args.len() { out = args[i].clone(); }
                }
                "--manifest" => {
                    i += 1;
                    if i < args.len() { manifest = args[i].clone(); }
                }
                other => {
                    eprintln!("[huntflow build] opción desconocida: {other}");
                    std::process::exit(2);
                }
            }
            i += 1;
        }

        match build_site(Path::new(&content), Path::new(&out), Path::new(&manifest)) {
            Ok(report) => {
                for warning in &report.warnings {
                    eprintln!("[huntflow build] aviso: {warning}");
                }
                println!("generado: {} equipos, {} páginas, versión {}", report.teams, report.pages, report.version);
                for (team, fingerprint) in &report.fingerprints {
                    println!("  {team}: {fingerprint}");
                }
                println!("manifiesto de pruebas en {manifest} — no publicar");
            }
            Err(e @ BuildError::Domain(_)) | Err(e @ BuildError::Chain(_)) => {
                eprintln!("[huntflow build] configuración inválida: {e}");
                std::process::exit(e.exit_code());
            }
            Err(e) => {
                eprintln!("[huntflow build] error: {e}");
                std::process::exit(e.exit_code());
            }
        }
    } else {
        eprintln!("Uso: huntflow build [--content <DIR>] [--out <DIR>] [--manifest <ARCHIVO>]");
        std::process::exit(2);
    }
}
