use crate::api::{Venue, VenueDetails, VenueId};

/// Summary of a venue pinned to the "My Places" screen, captured at the time
/// the place was saved.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SavedPlace {
    pub id: VenueId,
    pub name: String,
    pub icon: String,
    pub count: usize,
    pub details: VenueDetails,
}

impl SavedPlace {
    pub fn of(venue: &Venue) -> SavedPlace {
        SavedPlace {
            id: venue.id.clone(),
            name: venue.name.clone(),
            icon: venue.icon.clone(),
            count: venue.count,
            details: venue.details.clone(),
        }
    }
}

/// Ordered list of saved places; membership toggles on save.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SavedPlaces(Vec<SavedPlace>);

impl SavedPlaces {
    pub fn new() -> SavedPlaces {
        SavedPlaces(Vec::new())
    }

    pub fn seeded(places: Vec<SavedPlace>) -> SavedPlaces {
        SavedPlaces(places)
    }

    pub fn all(&self) -> &[SavedPlace] {
        &self.0
    }

    pub fn is_saved(&self, id: &VenueId) -> bool {
        self.0.iter().any(|p| p.id == *id)
    }

    /// Removes the venue when already saved, appends a fresh summary
    /// otherwise. Returns whether the venue is saved after the call.
    pub fn toggle(&mut self, venue: &Venue) -> bool {
        if let Some(pos) = self.0.iter().position(|p| p.id == venue.id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(SavedPlace::of(venue));
            true
        }
    }

    pub fn remove(&mut self, id: &VenueId) {
        self.0.retain(|p| p.id != *id);
    }
}

/// Venues the local user wants alert notifications for.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AlertSubscriptions(Vec<VenueId>);

impl AlertSubscriptions {
    pub fn new() -> AlertSubscriptions {
        AlertSubscriptions(Vec::new())
    }

    pub fn seeded(ids: Vec<VenueId>) -> AlertSubscriptions {
        AlertSubscriptions(ids)
    }

    pub fn all(&self) -> &[VenueId] {
        &self.0
    }

    pub fn contains(&self, id: &VenueId) -> bool {
        self.0.contains(id)
    }

    /// Returns whether the venue is subscribed after the call.
    pub fn toggle(&mut self, id: &VenueId) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id.clone());
            true
        }
    }
}

/// Entry of the alerts feed; tapping one deep-links into the venue sheet.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Alert {
    pub id: u32,
    pub venue_id: VenueId,
    pub location: String,
    pub date: String,
    pub time: String,
    pub lines: Vec<String>,
}
