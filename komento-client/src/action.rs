use komento_api::EntityId;

use crate::Vote;

/// Discrete user actions as emitted by the rendering collaborator. The
/// renderer keeps an id-keyed mapping from entities to their widgets and
/// reports plain ids here; the core never sees presentation elements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    SubmitNewComment {
        text: String,
    },
    SubmitEdit {
        entity: EntityId,
        text: String,
    },
    SubmitReply {
        target: EntityId,
        text: String,
    },
    /// Opens the delete-confirmation modal for the entity.
    RequestDelete {
        entity: EntityId,
    },
    ConfirmDelete,
    CancelDelete,
    Vote {
        entity: EntityId,
        direction: Vote,
    },
    RequestEdit {
        entity: EntityId,
    },
    RequestReply {
        entity: EntityId,
    },
    /// A click outside every active field; `still_focused` is the entity
    /// whose own field was clicked, if any.
    OutsideClick {
        still_focused: Option<EntityId>,
    },
}
