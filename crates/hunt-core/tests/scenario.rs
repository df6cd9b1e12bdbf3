//! Escenario completo de extremo a extremo sobre el núcleo: una tarea con
//! código "gnome42" y un equipo con código de inicio "START1".

use std::collections::BTreeMap;

use hunt_core::{build_team_chain, page_name, secret_hash, verify_submission, VerifyOutcome};
use hunt_domain::{parse_record, Task, Team};

const GNOME42_SHA256: &str = "30ccc00869dccdd7d068264c651f3d2bf33f13947aef2d7a94d32d3b7f0ce557";

fn load_task(id: &str, text: &str) -> Task {
    Task::from_record(&parse_record(id, text).unwrap()).unwrap()
}

#[test]
fn gnome42_scenario() {
    let mut tasks = BTreeMap::new();
    tasks.insert("t1".to_string(), load_task("t1", "code: gnome42\n\nBusca el gnomo del jardín."));
    let team = Team::from_record(&parse_record("equipo", "start_code: START1\nsequence:\n  - t1\n").unwrap()).unwrap();

    let chain = build_team_chain(&team, &tasks, None).unwrap();

    // Exactamente dos páginas: inicio + terminal.
    assert_eq!(chain.pages.len(), 2);

    // El secreto de una página anterior cerrada por "gnome42" sería el
    // SHA-256 del literal normalizado "GNOME42".
    assert_eq!(secret_hash("gnome42"), GNOME42_SHA256);

    // La página de inicio enlaza con el archivo derivado del código de
    // acceso "START1" (16 hex), y la página de t1 vive en ese archivo.
    let start = chain.start();
    let expected = format!("{}.html", page_name("START1"));
    assert_eq!(start.next_file.as_deref(), Some(expected.as_str()));
    assert_eq!(chain.steps()[0].file, expected);

    // La terminal no tiene formulario.
    assert!(chain.steps()[0].is_terminal);
    assert!(chain.steps()[0].secret_hash.is_none());

    // Enviar "gnome42 " (minúsculas, espacio final) en una página cerrada
    // por ese código debe aceptarse.
    let mut tasks2 = tasks.clone();
    tasks2.insert("t2".to_string(), load_task("t2", "\nFinal"));
    let team2 = Team::from_record(&parse_record("equipo2", "start_code: START1\nsequence:\n  - t1\n  - t2\n").unwrap()).unwrap();
    let chain2 = build_team_chain(&team2, &tasks2, None).unwrap();
    let gated = &chain2.steps()[0];
    assert!(matches!(verify_submission(gated, "gnome42 "), VerifyOutcome::Accepted { .. }));
    assert!(matches!(verify_submission(gated, "enano42"), VerifyOutcome::Rejected));
}

#[test]
fn filenames_and_secrets_are_stable_across_runs() {
    let mut tasks = BTreeMap::new();
    tasks.insert("t1".to_string(), load_task("t1", "code: gnome42\n\nPista"));
    tasks.insert("t2".to_string(), load_task("t2", "\nFinal"));
    let team = Team::from_record(&parse_record("equipo", "start_code: START1\nsequence:\n  - t1\n  - t2\n").unwrap()).unwrap();

    let a = build_team_chain(&team, &tasks, Some(45)).unwrap();
    let b = build_team_chain(&team, &tasks, Some(45)).unwrap();
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a.pages.len(), b.pages.len());
    for (pa, pb) in a.pages.iter().zip(b.pages.iter()) {
        assert_eq!(pa.file, pb.file);
        assert_eq!(pa.secret_hash, pb.secret_hash);
        assert_eq!(pa.next_file, pb.next_file);
    }
}
