use crate::VenueId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Text is empty or whitespace-only")]
    EmptyText,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Venue id already used {0}")]
    DuplicateVenue(VenueId),

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}
