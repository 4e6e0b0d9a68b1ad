use crate::{Time, User};

/// Identifier shared by comments and replies. Ids are allocated max+1 over
/// the whole collection, so they are unique across both entity kinds and are
/// never reused after a deletion.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct EntityId(pub i64);

/// A top-level post, owning its flat list of replies.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub content: String,
    pub created_at: Time,
    pub score: i64,
    pub user: User,
    pub replies: Vec<Reply>,

    /// Transient compose/edit flags. Absent from fresh seed documents, so
    /// they default to false; load paths reset them regardless.
    #[serde(default)]
    pub is_editing: bool,
    #[serde(default)]
    pub is_replying: bool,
}

/// A response attached to exactly one comment's reply list. Replies never
/// nest: replying to a reply inserts a sibling into the same list, so the
/// tree is exactly two levels deep.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: EntityId,
    pub content: String,
    pub created_at: Time,
    pub score: i64,
    pub user: User,

    /// Username of the entity this reply was composed against. Only replies
    /// carry this; its presence is what distinguishes the two entity kinds
    /// in the persisted document.
    pub replying_to: String,

    #[serde(default)]
    pub is_editing: bool,
    #[serde(default)]
    pub is_replying: bool,
}

impl Comment {
    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }

    pub fn is_authored_by(&self, username: &str) -> bool {
        self.user.username == username
    }
}

impl Reply {
    pub fn is_authored_by(&self, username: &str) -> bool {
        self.user.username == username
    }
}
