//! Transient edit/compose flag coordination. Every flag transition in the
//! system goes through these four operations plus the outside-click reset,
//! so the at-most-one-active policy is enforced in one place.

use komento_api::{EntityId, Error};

use crate::Store;

impl Store {
    /// Puts the entity in edit mode. Returns false without touching anything
    /// if it already is one (guard against double-invocation). Starting an
    /// edit does not close editors open on other entities; only the
    /// outside-click reset does that.
    pub fn begin_editing(&mut self, entity: EntityId) -> Result<bool, Error> {
        let (editing, _) = self.flags_mut(entity).ok_or(Error::OrphanReply(entity))?;
        if *editing {
            return Ok(false);
        }
        *editing = true;
        Ok(true)
    }

    /// Same idempotent-guard shape as `begin_editing`, for reply composing.
    pub fn begin_replying(&mut self, entity: EntityId) -> Result<bool, Error> {
        let (_, replying) = self.flags_mut(entity).ok_or(Error::OrphanReply(entity))?;
        if *replying {
            return Ok(false);
        }
        *replying = true;
        Ok(true)
    }

    /// Unconditional clear; used on commit and on cancel alike.
    pub fn end_editing(&mut self, entity: EntityId) -> Result<(), Error> {
        let (editing, _) = self.flags_mut(entity).ok_or(Error::OrphanReply(entity))?;
        *editing = false;
        Ok(())
    }

    pub fn end_replying(&mut self, entity: EntityId) -> Result<(), Error> {
        let (_, replying) = self.flags_mut(entity).ok_or(Error::OrphanReply(entity))?;
        *replying = false;
        Ok(())
    }

    /// A click landed outside any active field: close every open editor and
    /// compose form except the one on `still_focused`, discarding drafts.
    pub fn reset_all_outside(&mut self, still_focused: Option<EntityId>) {
        for c in &mut self.comments {
            if still_focused != Some(c.id) {
                c.is_editing = false;
                c.is_replying = false;
            }
            for r in &mut c.replies {
                if still_focused != Some(r.id) {
                    r.is_editing = false;
                    r.is_replying = false;
                }
            }
        }
    }
}
