mod ledger;
pub use ledger::VoteLedger;

mod places;
pub use places::{Alert, AlertSubscriptions, SavedPlace, SavedPlaces};

mod search;
pub use search::{NearbyCategory, NearbyDestination, PopularPlace, SearchEntry};

mod session;
pub use session::MapSession;

mod sheet;
pub use sheet::{Sheet, SheetState, DRAG_THRESHOLD};

mod store;
pub use store::VenueStore;

pub mod fixtures;

pub mod api {
    pub use pulsemap_api::*;
}
