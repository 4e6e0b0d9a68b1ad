use komento_api::{AppData, Comment, EntityId, Error, Reply, User};

/// The in-memory state container: the session user, the comment tree, and
/// the transient delete-confirmation subject. All mutation and coordination
/// operations go through this; module-level globals are deliberately absent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Store {
    pub current_user: User,
    pub comments: Vec<Comment>,

    /// Entity the delete-confirmation modal is currently asking about.
    /// Never serialized.
    pub(crate) pending_delete: Option<EntityId>,
}

/// Position of an entity inside the comment tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Location {
    pub comment: usize,
    /// None for a top-level comment, the reply index otherwise.
    pub reply: Option<usize>,
}

/// Read-only view over either entity kind.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Comment(&'a Comment),
    Reply(&'a Reply),
}

impl EntityRef<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            EntityRef::Comment(c) => c.id,
            EntityRef::Reply(r) => r.id,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            EntityRef::Comment(c) => &c.content,
            EntityRef::Reply(r) => &r.content,
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            EntityRef::Comment(c) => c.score,
            EntityRef::Reply(r) => r.score,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            EntityRef::Comment(c) => &c.user.username,
            EntityRef::Reply(r) => &r.user.username,
        }
    }

    pub fn is_editing(&self) -> bool {
        match self {
            EntityRef::Comment(c) => c.is_editing,
            EntityRef::Reply(r) => r.is_editing,
        }
    }

    pub fn is_replying(&self) -> bool {
        match self {
            EntityRef::Comment(c) => c.is_replying,
            EntityRef::Reply(r) => r.is_replying,
        }
    }
}

impl Store {
    pub fn stub() -> Store {
        Store {
            current_user: User {
                image: komento_api::Avatar {
                    png: String::new(),
                    webp: String::new(),
                },
                username: String::new(),
            },
            comments: Vec::new(),
            pending_delete: None,
        }
    }

    /// Builds a store from a loaded document, resetting every transient flag
    /// the way the original session reset them on startup.
    pub fn from_data(data: AppData) -> Store {
        let mut store = Store {
            current_user: data.current_user,
            comments: data.comments,
            pending_delete: None,
        };
        store.reset_all_outside(None);
        store
    }

    /// The wire-shaped document handed to the persistence collaborator.
    pub fn to_data(&self) -> AppData {
        AppData {
            current_user: self.current_user.clone(),
            comments: self.comments.clone(),
        }
    }

    /// Next unique id: max over every comment and reply, plus one. Never
    /// count-based (a count collides with surviving ids after any deletion).
    pub fn next_id(&self) -> Result<EntityId, Error> {
        self.all_ids().max().map(|EntityId(max)| EntityId(max + 1)).ok_or(Error::EmptyState)
    }

    pub fn pending_delete(&self) -> Option<EntityId> {
        self.pending_delete
    }

    pub fn entity(&self, id: EntityId) -> Option<EntityRef<'_>> {
        let loc = self.locate(id)?;
        Some(match loc.reply {
            None => EntityRef::Comment(&self.comments[loc.comment]),
            Some(i) => EntityRef::Reply(&self.comments[loc.comment].replies[i]),
        })
    }

    fn all_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.comments
            .iter()
            .flat_map(|c| std::iter::once(c.id).chain(c.replies.iter().map(|r| r.id)))
    }

    /// Linear search, comments first, then every comment's reply list (the
    /// id-keyed replacement for the original's DOM lookups).
    pub(crate) fn locate(&self, id: EntityId) -> Option<Location> {
        for (ci, c) in self.comments.iter().enumerate() {
            if c.id == id {
                return Some(Location {
                    comment: ci,
                    reply: None,
                });
            }
            for (ri, r) in c.replies.iter().enumerate() {
                if r.id == id {
                    return Some(Location {
                        comment: ci,
                        reply: Some(ri),
                    });
                }
            }
        }
        None
    }

    /// Thread resolution: the index of the comment whose reply list receives
    /// a reply aimed at `target`. Replying to a reply lands in the owning
    /// comment's flat list, so the tree stays exactly two levels deep.
    pub(crate) fn thread_of(&self, target: EntityId) -> Result<usize, Error> {
        match self.locate(target) {
            Some(loc) => Ok(loc.comment),
            None => Err(Error::OrphanReply(target)),
        }
    }

    pub(crate) fn flags_mut(&mut self, id: EntityId) -> Option<(&mut bool, &mut bool)> {
        let loc = self.locate(id)?;
        Some(match loc.reply {
            None => {
                let c = &mut self.comments[loc.comment];
                (&mut c.is_editing, &mut c.is_replying)
            }
            Some(i) => {
                let r = &mut self.comments[loc.comment].replies[i];
                (&mut r.is_editing, &mut r.is_replying)
            }
        })
    }
}
