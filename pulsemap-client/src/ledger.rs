use std::collections::HashMap;

use crate::api::{CommentId, VoteDirection};

/// The local user's vote per comment or reply: at most one direction per id.
/// Single-user state only; there is no cross-user merging anywhere.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VoteLedger(HashMap<CommentId, VoteDirection>);

impl VoteLedger {
    pub fn new() -> VoteLedger {
        VoteLedger(HashMap::new())
    }

    pub fn get(&self, id: &CommentId) -> Option<VoteDirection> {
        self.0.get(id).copied()
    }

    pub fn set(&mut self, id: CommentId, direction: VoteDirection) {
        self.0.insert(id, direction);
    }

    pub fn clear(&mut self, id: &CommentId) {
        self.0.remove(id);
    }

    /// Sweeps the entries of a deleted comment and everything removed with it.
    pub fn clear_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a CommentId>) {
        for id in ids {
            self.0.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
