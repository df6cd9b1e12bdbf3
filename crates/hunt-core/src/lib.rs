//! hunt-core: motor determinista de cadenas de páginas.
pub mod chain;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod verify;

pub use chain::{build_team_chain, ChainPage, PageKind, TeamChain};
pub use errors::ChainError;
pub use hashing::{hash_str, hash_value, normalize_code, page_name, secret_hash, to_canonical_json};
pub use verify::{verify_submission, VerifyOutcome};
