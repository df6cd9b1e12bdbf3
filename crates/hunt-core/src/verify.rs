//! Verificación de códigos enviados: espejo en Rust de la decisión que toma
//! el runtime del navegador, para poder testear la propiedad en el servidor.
//!
//! La comparación es entre hashes: la página sólo conoce el SHA-256 del
//! código esperado, nunca el código en claro. Un rechazo es rutinario y
//! siempre recuperable reenviando; no es un error del sistema.

use crate::chain::ChainPage;
use crate::hashing::secret_hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// El hash coincide: navegar al siguiente archivo.
    Accepted { next_file: String },
    Rejected,
}

pub fn verify_submission(page: &ChainPage, submitted: &str) -> VerifyOutcome {
    match (&page.secret_hash, &page.next_file) {
        (Some(secret), Some(next)) if secret_hash(submitted) == *secret => {
            VerifyOutcome::Accepted { next_file: next.clone() }
        }
        _ => VerifyOutcome::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::PageKind;

    fn page(secret_of: Option<&str>, next: Option<&str>) -> ChainPage {
        ChainPage { team_id: "rojo".to_string(),
                    step: 1,
                    kind: PageKind::Task { task_id: "a".to_string() },
                    file: "x.html".to_string(),
                    secret_hash: secret_of.map(secret_hash),
                    next_file: next.map(str::to_string),
                    timeout_minutes: None,
                    is_terminal: secret_of.is_none() }
    }

    #[test]
    fn exact_code_is_accepted() {
        let p = page(Some("gnome42"), Some("abc.html"));
        assert_eq!(verify_submission(&p, "gnome42"),
                   VerifyOutcome::Accepted { next_file: "abc.html".to_string() });
    }

    #[test]
    fn case_and_whitespace_variants_are_accepted() {
        let p = page(Some("gnome42"), Some("abc.html"));
        for variant in ["GNOME42", " gnome42 ", "Gnome42\n", "gNoMe42"] {
            assert!(matches!(verify_submission(&p, variant), VerifyOutcome::Accepted { .. }),
                    "variant {variant:?} should be accepted");
        }
    }

    #[test]
    fn wrong_code_is_rejected() {
        let p = page(Some("gnome42"), Some("abc.html"));
        for wrong in ["gnome43", "", "gnome 42", "42gnome"] {
            assert_eq!(verify_submission(&p, wrong), VerifyOutcome::Rejected);
        }
    }

    #[test]
    fn terminal_page_rejects_everything() {
        let p = page(None, None);
        assert_eq!(verify_submission(&p, "gnome42"), VerifyOutcome::Rejected);
    }
}
