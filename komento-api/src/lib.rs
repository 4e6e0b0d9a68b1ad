use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, EntityId, Reply};

mod error;
pub use error::Error;

mod user;
pub use user::{Avatar, User};

/// The root aggregate, exactly as it crosses the wire: the document served by
/// the seed endpoint and the document written to the persistence collaborator.
///
/// The transient `is_editing`/`is_replying` flags on the entities inside do
/// get serialized (the original dataset written back to storage carries them),
/// but every load path resets them to false before use.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub current_user: User,
    pub comments: Vec<Comment>,
}

/// Rejects blank or whitespace-only content.
// See comments on other `validate` functions throughout komento-api
pub fn validate_content(s: &str) -> Result<(), Error> {
    if s.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(())
}
