use komento_api::{AppData, Error};

use crate::{fetch, storage, Action, Storage, Store};

/// One page session: the state container plus the persistence collaborator,
/// dispatching the renderer's actions one at a time. Mutations run to
/// completion synchronously; the only async point is the one-time bootstrap
/// fetch.
pub struct Session<S> {
    store: Store,
    storage: S,
}

impl<S: Storage> Session<S> {
    /// Read-through startup with a caller-provided seed document: whatever
    /// the storage collaborator holds takes priority over the seed.
    pub fn new(storage: S, seed: AppData) -> Session<S> {
        let data = storage::load_app_data(&storage).unwrap_or(seed);
        Session {
            store: Store::from_data(data),
            storage,
        }
    }

    /// Read-through startup against the fetch collaborator: stored state if
    /// present, otherwise one GET of the seed endpoint. A failed fetch is
    /// fatal (`Error::DataLoad`); no session is created and no state
    /// operation runs.
    pub async fn bootstrap(storage: S, seed_url: &str) -> Result<Session<S>, Error> {
        let data = match storage::load_app_data(&storage) {
            Some(data) => data,
            None => fetch::fetch_app_data(seed_url).await?,
        };
        Ok(Session {
            store: Store::from_data(data),
            storage,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatches one user action. Validation errors bubble back to the
    /// boundary (the renderer re-prompts the same field); they never reach
    /// persistence, and on any error the model is as it was before.
    /// Integrity errors additionally get logged here: they halt the
    /// offending operation only, and must never pass silently.
    pub fn apply(&mut self, action: Action) -> Result<(), Error> {
        tracing::debug!(?action, "applying user action");
        let res = self.dispatch(action);
        if let Err(e @ Error::OrphanReply(_)) = &res {
            tracing::warn!("integrity error while applying action: {e}");
        }
        res
    }

    fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::SubmitNewComment { text } => {
                self.store.create_comment(&text)?;
                self.persist();
            }
            Action::SubmitEdit { entity, text } => {
                self.store.edit_content(entity, &text)?;
                self.store.end_editing(entity)?;
                self.persist();
            }
            Action::SubmitReply { target, text } => {
                self.store.create_reply(target, &text)?;
                self.store.end_replying(target)?;
                self.persist();
            }
            Action::RequestDelete { entity } => {
                self.store.pending_delete = Some(entity);
            }
            Action::ConfirmDelete => match self.store.pending_delete.take() {
                Some(entity) => {
                    self.store.delete_entity(entity)?;
                    self.persist();
                }
                None => tracing::warn!("delete confirmed with no deletion pending"),
            },
            Action::CancelDelete => {
                self.store.pending_delete = None;
            }
            Action::Vote { entity, direction } => {
                self.store.vote(entity, direction)?;
                self.persist();
            }
            Action::RequestEdit { entity } => {
                self.store.begin_editing(entity)?;
            }
            Action::RequestReply { entity } => {
                self.store.begin_replying(entity)?;
            }
            Action::OutsideClick { still_focused } => {
                self.store.reset_all_outside(still_focused);
            }
        }
        Ok(())
    }

    /// Write-through after a successful mutation: fire-and-forget, never
    /// awaited, never retried, never allowed to block the next interaction.
    fn persist(&mut self) {
        storage::save_app_data(&mut self.storage, &self.store.to_data());
    }
}
