use uuid::Uuid;

mod comment;
mod error;
mod position;
mod venue;
mod vote;

pub use comment::{Comment, CommentTarget, RemovedComment, Reply};
pub use error::Error;
pub use position::{MapBounds, Position, RawPosition};
pub use venue::{RawComment, RawReply, RawVenue, Venue, VenueDetails, VenueLinks};
pub use vote::{Tally, Votable, VoteDirection};

pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid::uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Author name that marks a comment as written by the local user. Comments
/// carrying it are the only ones the UI offers edit/delete affordances for.
pub const LOCAL_AUTHOR: &str = "You";

/// Fixture-supplied slug identifying a venue, eg `"cbp"`.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct VenueId(pub String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> VenueId {
        VenueId(id.into())
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a comment or reply, unique within the process lifetime.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4())
    }

    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

/// Validates user-submitted comment text before it reaches any mutation.
pub fn validate_text(text: &str) -> Result<(), Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyText);
    }
    if text.contains('\0') {
        return Err(Error::NullByteInString(text.to_string()));
    }
    Ok(())
}

/// Formats a timestamp the way the venue feed displays it, eg "9:36pm".
pub fn display_time<Tz: chrono::TimeZone>(t: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%-I:%M%P").to_string()
}

pub fn now_display() -> String {
    display_time(chrono::Local::now())
}
