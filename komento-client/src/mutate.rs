use chrono::Utc;
use komento_api::{validate_content, Comment, EntityId, Error, Reply};

use crate::Store;

/// One click on the upvote or downvote control. Unlimited and anonymous:
/// there is no per-user tracking and no duplicate-click protection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn delta(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

/// Drops one leading `@username` mention token (optional trailing period)
/// from reply content before storage. The compose field pre-fills the
/// mention, so the stored text must not echo it back.
fn strip_mention(content: &str, username: &str) -> String {
    let mention = format!("@{username}");
    match content.strip_prefix(mention.as_str()) {
        Some(rest) => {
            let rest = rest.strip_prefix('.').unwrap_or(rest);
            rest.trim_start().to_string()
        }
        None => content.to_string(),
    }
}

impl Store {
    /// Appends a new top-level comment authored by the session user.
    pub fn create_comment(&mut self, content: &str) -> Result<&Comment, Error> {
        validate_content(content)?;
        let id = self.next_id()?;
        let idx = self.comments.len();
        self.comments.push(Comment {
            id,
            content: content.to_string(),
            created_at: Utc::now(),
            score: 0,
            user: self.current_user.clone(),
            replies: Vec::new(),
            is_editing: false,
            is_replying: false,
        });
        Ok(&self.comments[idx])
    }

    /// Appends a reply into the thread of `target`. Replying to a reply
    /// inserts a sibling into the owning comment's list, never a new level.
    pub fn create_reply(&mut self, target: EntityId, content: &str) -> Result<&Reply, Error> {
        let thread = self.thread_of(target)?;
        let replying_to = self
            .entity(target)
            .ok_or(Error::OrphanReply(target))?
            .username()
            .to_string();

        let stored = strip_mention(content, &replying_to);
        validate_content(&stored)?;
        let id = self.next_id()?;
        let user = self.current_user.clone();

        let replies = &mut self.comments[thread].replies;
        let idx = replies.len();
        replies.push(Reply {
            id,
            content: stored,
            created_at: Utc::now(),
            score: 0,
            user,
            replying_to,
            is_editing: false,
            is_replying: false,
        });
        Ok(&self.comments[thread].replies[idx])
    }

    /// Replaces the entity's content verbatim. No mention-stripping here:
    /// stored content is already canonical.
    pub fn edit_content(&mut self, entity: EntityId, new_content: &str) -> Result<(), Error> {
        validate_content(new_content)?;
        let loc = self.locate(entity).ok_or(Error::OrphanReply(entity))?;
        match loc.reply {
            None => self.comments[loc.comment].content = new_content.to_string(),
            Some(i) => self.comments[loc.comment].replies[i].content = new_content.to_string(),
        }
        Ok(())
    }

    /// Splices the entity out of its owning list. Deleting a comment takes
    /// its replies with it; replies own nothing, so no cascade is needed.
    pub fn delete_entity(&mut self, entity: EntityId) -> Result<(), Error> {
        let loc = self.locate(entity).ok_or(Error::OrphanReply(entity))?;
        match loc.reply {
            None => {
                self.comments.remove(loc.comment);
            }
            Some(i) => {
                self.comments[loc.comment].replies.remove(i);
            }
        }
        Ok(())
    }

    /// Applies one vote and returns the new score. Unbounded in both
    /// directions.
    pub fn vote(&mut self, entity: EntityId, vote: Vote) -> Result<i64, Error> {
        let loc = self.locate(entity).ok_or(Error::OrphanReply(entity))?;
        let score = match loc.reply {
            None => {
                let c = &mut self.comments[loc.comment];
                c.score += vote.delta();
                c.score
            }
            Some(i) => {
                let r = &mut self.comments[loc.comment].replies[i];
                r.score += vote.delta();
                r.score
            }
        };
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;
    use std::collections::HashSet;

    fn seed_store() -> Store {
        Store::from_data(testutil::seed_data())
    }

    #[test]
    fn create_comment_appends_with_fresh_id_and_session_author() {
        let mut store = seed_store();
        let c = store.create_comment("a thought").unwrap();
        assert_eq!(c.id, EntityId(3));
        assert_eq!(c.content, "a thought");
        assert_eq!(c.score, 0);
        assert_eq!(c.user.username, "carol");
        assert!(c.replies.is_empty());
    }

    #[test]
    fn empty_content_is_rejected_without_any_mutation() {
        let mut store = seed_store();
        let before = store.clone();

        assert_eq!(store.create_comment("").unwrap_err(), Error::EmptyContent);
        assert_eq!(store.create_comment("   ").unwrap_err(), Error::EmptyContent);
        assert_eq!(
            store.create_reply(EntityId(1), " \t ").unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(
            store.edit_content(EntityId(1), "").unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(store, before);
    }

    #[test]
    fn reply_to_reply_lands_in_the_owning_comments_list() {
        let mut store = seed_store();
        // id 2 is bob's reply under alice's comment
        let r = store.create_reply(EntityId(2), "@bob. agreed").unwrap();
        assert_eq!(r.id, EntityId(3));
        assert_eq!(r.replying_to, "bob");

        // Flat thread under comment 1; depth stays at two levels
        assert_eq!(store.comments.len(), 1);
        assert_eq!(store.comments[0].replies.len(), 2);

        // And again, replying to the brand-new reply
        store.create_reply(EntityId(3), "@carol still flat").unwrap();
        assert_eq!(store.comments[0].replies.len(), 3);
    }

    #[test]
    fn mention_prefix_is_stripped_from_stored_reply_content() {
        let mut store = seed_store();
        let id = store.create_reply(EntityId(1), "@alice. nice point").unwrap().id;
        assert_eq!(store.entity(id).unwrap().content(), "nice point");

        // Without the trailing period
        let id = store.create_reply(EntityId(1), "@alice nice point").unwrap().id;
        assert_eq!(store.entity(id).unwrap().content(), "nice point");

        // A mention of somebody else is not a prefix and stays verbatim
        let id = store.create_reply(EntityId(1), "@bob said so").unwrap().id;
        assert_eq!(store.entity(id).unwrap().content(), "@bob said so");
    }

    #[test]
    fn reply_that_is_only_a_mention_counts_as_empty() {
        let mut store = seed_store();
        assert_eq!(
            store.create_reply(EntityId(1), "@alice.").unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(
            store.create_reply(EntityId(1), "@alice").unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(store.comments[0].replies.len(), 1);
    }

    #[test]
    fn edit_stores_the_literal_text_unmodified() {
        let mut store = seed_store();
        let id = store.create_reply(EntityId(1), "@alice. nice point").unwrap().id;

        // Editing does not re-strip the mention
        store.edit_content(id, "@alice. nice point").unwrap();
        assert_eq!(store.entity(id).unwrap().content(), "@alice. nice point");
    }

    #[test]
    fn vote_round_trips() {
        let mut store = seed_store();
        let before = store.entity(EntityId(1)).unwrap().score();
        assert_eq!(store.vote(EntityId(1), Vote::Up), Ok(before + 1));
        assert_eq!(store.vote(EntityId(1), Vote::Down), Ok(before));

        // No floor: downvoting keeps going below zero
        assert_eq!(store.vote(EntityId(2), Vote::Down), Ok(-1));
        assert_eq!(store.vote(EntityId(2), Vote::Down), Ok(-2));
    }

    #[test]
    fn deleting_the_sole_reply_keeps_the_comment_with_an_empty_list() {
        let mut store = seed_store();
        store.delete_entity(EntityId(2)).unwrap();
        assert_eq!(store.comments.len(), 1);
        assert!(store.comments[0].replies.is_empty());
    }

    #[test]
    fn deleting_a_comment_removes_it_and_its_replies() {
        let mut store = seed_store();
        store.delete_entity(EntityId(1)).unwrap();
        assert!(store.comments.is_empty());
        assert!(store.entity(EntityId(2)).is_none());
    }

    #[test]
    fn unknown_entity_is_an_integrity_error() {
        let mut store = seed_store();
        assert_eq!(
            store.delete_entity(EntityId(42)).unwrap_err(),
            Error::OrphanReply(EntityId(42))
        );
        assert_eq!(
            store.create_reply(EntityId(42), "hello?").unwrap_err(),
            Error::OrphanReply(EntityId(42))
        );
        assert_eq!(
            store.vote(EntityId(42), Vote::Up).unwrap_err(),
            Error::OrphanReply(EntityId(42))
        );
    }

    #[test]
    fn ids_stay_pairwise_distinct_across_create_delete_cycles() {
        let mut store = seed_store();
        for round in 0..10 {
            store.create_comment(&format!("round {round}")).unwrap();
            store.create_reply(EntityId(1), "sibling").unwrap();
            if round % 3 == 0 {
                // Delete a non-maximum entity: a count-based allocator
                // would now hand out an id colliding with a survivor.
                let victim = store.comments[1].id;
                store.delete_entity(victim).unwrap();
            }

            let ids: Vec<i64> = store
                .comments
                .iter()
                .flat_map(|c| std::iter::once(c.id.0).chain(c.replies.iter().map(|r| r.id.0)))
                .collect();
            let unique: HashSet<i64> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "live ids collided: {ids:?}");
        }
    }

    #[test]
    fn vote_then_delete_reallocates_down() {
        // One comment (id 1, score 0) holding one reply (id 2)
        let mut store = seed_store();

        assert_eq!(store.vote(EntityId(1), Vote::Up), Ok(1));
        assert_eq!(store.next_id(), Ok(EntityId(3)));

        store.delete_entity(EntityId(2)).unwrap();
        assert!(store.comments[0].replies.is_empty());

        // Remaining ids are {1}, so allocation comes back down to 2
        assert_eq!(store.next_id(), Ok(EntityId(2)));
    }
}
