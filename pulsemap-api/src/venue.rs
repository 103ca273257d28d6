use crate::{
    Comment, CommentId, CommentTarget, Error, MapBounds, Position, RawPosition, RemovedComment,
    Reply, Tally, Votable, VenueId, VoteDirection,
};

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VenueLinks {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tickets: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VenueDetails {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: VenueLinks,
}

/// A point of interest with its comment thread. Created once at load time
/// from fixture data and mutated only through the methods below.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub icon: String,
    pub position: Position,
    pub details: VenueDetails,

    /// Top-level comments, newest-first.
    pub comments: Vec<Comment>,

    /// Denormalized: equal to `comments.len()` after every mutation. Replies
    /// are not counted.
    pub count: usize,
}

impl Venue {
    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *id)
    }

    pub fn comment_mut(&mut self, id: &CommentId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == *id)
    }

    /// Inserts a new top-level comment at the front of the thread.
    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        self.count += 1;
    }

    /// Appends a reply to the addressed top-level comment. Returns false
    /// (leaving the venue untouched) when the parent is not in the thread.
    pub fn append_reply(&mut self, parent: &CommentId, reply: Reply) -> bool {
        match self.comment_mut(parent) {
            Some(c) => {
                c.replies.push(reply);
                true
            }
            None => false,
        }
    }

    /// Replaces the text of the addressed comment or reply in place. Does not
    /// check authorship; restricting edits to the local user's comments is the
    /// caller's concern.
    pub fn edit_text(&mut self, target: &CommentTarget, text: &str) -> bool {
        match target {
            CommentTarget::TopLevel(id) => match self.comment_mut(id) {
                Some(c) => {
                    c.text = text.to_owned();
                    true
                }
                None => false,
            },
            CommentTarget::Reply { parent, id } => {
                let Some(parent) = self.comment_mut(parent) else {
                    return false;
                };
                match parent.replies.iter_mut().find(|r| r.id == *id) {
                    Some(r) => {
                        r.text = text.to_owned();
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Removes the addressed comment or reply. A top-level removal discards
    /// the comment's replies with it and decrements `count`; a reply removal
    /// touches only its parent's reply list. The returned record lists every
    /// id that left the tree so the vote ledger can be swept.
    pub fn remove(&mut self, target: &CommentTarget) -> Option<RemovedComment> {
        match target {
            CommentTarget::TopLevel(id) => {
                let pos = self.comments.iter().position(|c| c.id == *id)?;
                let removed = self.comments.remove(pos);
                self.count -= 1;
                Some(RemovedComment {
                    id: removed.id,
                    reply_ids: removed.replies.iter().map(|r| r.id).collect(),
                })
            }
            CommentTarget::Reply { parent, id } => {
                let parent = self.comment_mut(parent)?;
                let pos = parent.replies.iter().position(|r| r.id == *id)?;
                let removed = parent.replies.remove(pos);
                Some(RemovedComment {
                    id: removed.id,
                    reply_ids: Vec::new(),
                })
            }
        }
    }

    /// Shifts the vote tally of the addressed comment or reply.
    pub fn apply_vote(
        &mut self,
        target: &CommentTarget,
        prior: Option<VoteDirection>,
        next: VoteDirection,
    ) -> bool {
        match target {
            CommentTarget::TopLevel(id) => match self.comment_mut(id) {
                Some(c) => {
                    c.apply_vote(prior, next);
                    true
                }
                None => false,
            },
            CommentTarget::Reply { parent, id } => {
                let Some(parent) = self.comment_mut(parent) else {
                    return false;
                };
                match parent.replies.iter_mut().find(|r| r.id == *id) {
                    Some(r) => {
                        r.apply_vote(prior, next);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub fn count_is_consistent(&self) -> bool {
        self.count == self.comments.len()
    }
}

/// Fixture-shaped venue record, deserialized straight from the sample data
/// document. Position comes either as coordinates or as viewport percentages;
/// `initialCount` is a leftover bubble-sizing hint and is never trusted for
/// the real comment count.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub x_pct: Option<f64>,
    #[serde(default)]
    pub y_pct: Option<f64>,
    #[serde(default)]
    pub initial_count: Option<usize>,
    #[serde(default)]
    pub details: VenueDetails,
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RawComment {
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    pub time: String,
    #[serde(default)]
    pub replies: Vec<RawReply>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RawReply {
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    pub time: String,
}

impl RawVenue {
    /// Resolves the dynamic fixture shape into the normalized model:
    /// coordinates win over percent offsets, comment ids are generated fresh,
    /// and `count` is computed from the comment list.
    pub fn normalize(self, bounds: &MapBounds) -> Result<Venue, Error> {
        let position = match (self.lat, self.lng, self.x_pct, self.y_pct) {
            (Some(lat), Some(lng), _, _) => RawPosition::Coordinates { lat, lng },
            (_, _, Some(x_pct), Some(y_pct)) => RawPosition::PercentOffset { x_pct, y_pct },
            _ => {
                return Err(Error::InvalidFixture(format!(
                    "venue {:?} has neither coordinates nor percent offsets",
                    self.id
                )))
            }
        };
        let comments: Vec<Comment> = self.comments.into_iter().map(RawComment::normalize).collect();
        let count = comments.len();
        Ok(Venue {
            id: VenueId(self.id),
            name: self.name,
            icon: self.icon,
            position: position.resolve(bounds),
            details: self.details,
            comments,
            count,
        })
    }
}

impl RawComment {
    fn normalize(self) -> Comment {
        Comment {
            id: CommentId::generate(),
            author: self.author,
            text: self.text,
            tally: Tally::new(self.upvotes, self.downvotes),
            time: self.time,
            replies: self.replies.into_iter().map(RawReply::normalize).collect(),
        }
    }
}

impl RawReply {
    fn normalize(self) -> Reply {
        Reply {
            id: CommentId::generate(),
            author: self.author,
            text: self.text,
            tally: Tally::new(self.upvotes, self.downvotes),
            time: self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_venue() -> Venue {
        Venue {
            id: VenueId::new("v1"),
            name: String::from("Test Venue"),
            icon: String::from("stadium"),
            position: Position { lat: 0.0, lng: 0.0 },
            details: VenueDetails::default(),
            comments: Vec::new(),
            count: 0,
        }
    }

    #[test]
    fn prepend_is_newest_first() {
        let mut v = empty_venue();
        let first = Comment::now("first");
        let second = Comment::now("second");
        v.prepend_comment(first.clone());
        v.prepend_comment(second.clone());
        assert_eq!(v.comments[0].id, second.id);
        assert_eq!(v.comments[1].id, first.id);
        assert_eq!(v.count, 2);
        assert!(v.count_is_consistent());
    }

    #[test]
    fn replies_append_oldest_first() {
        let mut v = empty_venue();
        let c = Comment::now("top");
        let cid = c.id;
        v.prepend_comment(c);
        let r1 = Reply::now("one");
        let r2 = Reply::now("two");
        assert!(v.append_reply(&cid, r1.clone()));
        assert!(v.append_reply(&cid, r2.clone()));
        let replies = &v.comment(&cid).unwrap().replies;
        assert_eq!(replies[0].id, r1.id);
        assert_eq!(replies[1].id, r2.id);
        // replies never move the denormalized count
        assert_eq!(v.count, 1);
    }

    #[test]
    fn reply_to_missing_parent_is_rejected() {
        let mut v = empty_venue();
        assert!(!v.append_reply(&CommentId::generate(), Reply::now("lost")));
        assert!(v.count_is_consistent());
    }

    #[test]
    fn edit_replaces_text_in_place() {
        let mut v = empty_venue();
        let c = Comment::now("top");
        let cid = c.id;
        v.prepend_comment(c);
        let r = Reply::now("nested");
        let rid = r.id;
        v.append_reply(&cid, r);

        assert!(v.edit_text(&CommentTarget::TopLevel(cid), "edited"));
        assert_eq!(v.comment(&cid).unwrap().text, "edited");

        assert!(v.edit_text(
            &CommentTarget::Reply {
                parent: cid,
                id: rid
            },
            "also edited",
        ));
        assert_eq!(v.comment(&cid).unwrap().replies[0].text, "also edited");

        assert!(!v.edit_text(&CommentTarget::TopLevel(CommentId::generate()), "nope"));
    }

    #[test]
    fn removing_a_top_level_comment_reports_its_replies() {
        let mut v = empty_venue();
        let c = Comment::now("top");
        let cid = c.id;
        v.prepend_comment(c);
        let r = Reply::now("nested");
        let rid = r.id;
        v.append_reply(&cid, r);

        let removed = v.remove(&CommentTarget::TopLevel(cid)).unwrap();
        assert_eq!(removed.id, cid);
        assert_eq!(removed.reply_ids, vec![rid]);
        assert!(v.comments.is_empty());
        assert_eq!(v.count, 0);
    }

    #[test]
    fn removing_a_reply_keeps_the_parent_and_count() {
        let mut v = empty_venue();
        let c = Comment::now("top");
        let cid = c.id;
        v.prepend_comment(c);
        let r = Reply::now("nested");
        let rid = r.id;
        v.append_reply(&cid, r);

        let removed = v
            .remove(&CommentTarget::Reply {
                parent: cid,
                id: rid,
            })
            .unwrap();
        assert_eq!(removed.id, rid);
        assert!(removed.reply_ids.is_empty());
        assert_eq!(v.count, 1);
        assert!(v.comment(&cid).unwrap().replies.is_empty());
    }

    #[test]
    fn normalize_prefers_coordinates_and_computes_count() {
        let raw: RawVenue = serde_json::from_str(
            r#"{
                "id": "cbp",
                "name": "Citizens Bank Park",
                "icon": "stadium",
                "xPct": 50,
                "yPct": 40,
                "lat": 39.9057,
                "lng": -75.1665,
                "initialCount": 99,
                "details": { "event": "Concert" },
                "comments": [
                    { "author": "David", "text": "First opener just started!",
                      "upvotes": 271, "downvotes": 1, "time": "9:12pm" },
                    { "author": "You", "text": "Is it good enough to go right now?",
                      "time": "9:36pm",
                      "replies": [
                          { "author": "Laura", "text": "Yes! Everyone is dancing.",
                            "time": "9:41pm" }
                      ] }
                ]
            }"#,
        )
        .unwrap();
        let v = raw.normalize(&MapBounds::default()).unwrap();
        assert_eq!(v.position, Position { lat: 39.9057, lng: -75.1665 });
        // initialCount is a stale bubble hint; the real count is derived
        assert_eq!(v.count, 2);
        assert_eq!(v.comments[0].tally.upvotes, 271);
        assert!(v.comments[1].is_local());
        assert_eq!(v.comments[1].replies.len(), 1);
    }

    #[test]
    fn normalize_without_any_position_fails() {
        let raw: RawVenue = serde_json::from_str(
            r#"{ "id": "x", "name": "X", "icon": "pin" }"#,
        )
        .unwrap();
        assert!(matches!(
            raw.normalize(&MapBounds::default()),
            Err(Error::InvalidFixture(_)),
        ));
    }
}
