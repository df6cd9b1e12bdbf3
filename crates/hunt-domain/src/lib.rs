// hunt-domain library entry point
pub mod errors;
pub mod markdown;
pub mod record;
pub mod settings;
pub mod task;
pub mod team;

pub use errors::DomainError;
pub use markdown::render_markdown;
pub use record::{parse_record, HeaderValue, Record};
pub use settings::{HuntSettings, Organizer};
pub use task::Task;
pub use team::Team;
