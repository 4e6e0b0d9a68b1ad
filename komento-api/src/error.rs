use crate::EntityId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Blank or whitespace-only content was submitted for a create, reply or
    /// edit. Recoverable: the boundary re-prompts the same field, no state
    /// was changed.
    #[error("content is empty")]
    EmptyContent,

    /// An entity id that is attached to no comment was handed to an
    /// operation. Integrity violation: halts the offending operation only.
    #[error("entity {0:?} is not attached to any comment")]
    OrphanReply(EntityId),

    /// Id allocation was attempted on a store with no entity at all. Only
    /// possible before any seed data exists; precondition violation.
    #[error("cannot allocate an id on an empty store")]
    EmptyState,

    /// The one-time initial fetch failed. Fatal and non-retryable: the
    /// caller surfaces a blocking notice and performs no state operations.
    #[error("failed to load initial data: {0}")]
    DataLoad(String),
}
