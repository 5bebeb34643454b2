pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ProfessorError};
pub use id::{new_id, MessageId};
pub use types::DepthLevel;

pub type Result<T> = std::result::Result<T, ProfessorError>;
