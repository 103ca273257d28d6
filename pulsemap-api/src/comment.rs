use crate::{CommentId, Tally, Votable, LOCAL_AUTHOR};

/// A second-level comment. Replies attach to exactly one top-level comment
/// and never nest further.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    #[serde(flatten)]
    pub tally: Tally,
    pub time: String,
}

/// A comment attached directly to a venue. Top-level comments are the only
/// ones counted in `Venue::count`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    #[serde(flatten)]
    pub tally: Tally,
    pub time: String,

    /// Replies in oldest-first order.
    pub replies: Vec<Reply>,
}

impl Comment {
    /// A fresh comment by the local user, timestamped now.
    pub fn now(text: impl Into<String>) -> Comment {
        Comment {
            id: CommentId::generate(),
            author: LOCAL_AUTHOR.to_string(),
            text: text.into(),
            tally: Tally::default(),
            time: crate::now_display(),
            replies: Vec::new(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.author == LOCAL_AUTHOR
    }

    pub fn reply(&self, id: &CommentId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == *id)
    }
}

impl Reply {
    pub fn now(text: impl Into<String>) -> Reply {
        Reply {
            id: CommentId::generate(),
            author: LOCAL_AUTHOR.to_string(),
            text: text.into(),
            tally: Tally::default(),
            time: crate::now_display(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.author == LOCAL_AUTHOR
    }
}

impl Votable for Comment {
    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

impl Votable for Reply {
    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

/// Addresses a comment within one venue's tree, either directly or through
/// its owning top-level comment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommentTarget {
    TopLevel(CommentId),
    Reply { parent: CommentId, id: CommentId },
}

impl CommentTarget {
    /// The id the vote ledger is keyed by.
    pub fn id(&self) -> &CommentId {
        match self {
            CommentTarget::TopLevel(id) => id,
            CommentTarget::Reply { id, .. } => id,
        }
    }
}

/// What a removal took out of the tree, so the caller can sweep the vote
/// ledger for everything that went with it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemovedComment {
    pub id: CommentId,
    pub reply_ids: Vec<CommentId>,
}
