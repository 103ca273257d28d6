use crate::api::{Error, MapBounds, RawVenue, Venue, VenueId};

/// Authoritative owner of the venue list. Venues are loaded once from fixture
/// data and never added or removed afterwards; only their comment trees and
/// counts change.
#[derive(Clone, Debug, Default)]
pub struct VenueStore {
    venues: Vec<Venue>,
}

impl VenueStore {
    pub fn new(venues: Vec<Venue>) -> VenueStore {
        VenueStore { venues }
    }

    /// Normalizes raw fixture records into the store, rejecting duplicate ids.
    pub fn load(raw: Vec<RawVenue>, bounds: &MapBounds) -> anyhow::Result<VenueStore> {
        let mut venues: Vec<Venue> = Vec::with_capacity(raw.len());
        for r in raw {
            let v = r.normalize(bounds)?;
            if venues.iter().any(|existing| existing.id == v.id) {
                return Err(Error::DuplicateVenue(v.id).into());
            }
            venues.push(v);
        }
        tracing::debug!(num_venues = venues.len(), "venue store loaded");
        Ok(VenueStore { venues })
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == *id)
    }

    pub fn contains(&self, id: &VenueId) -> bool {
        self.venue(id).is_some()
    }

    /// Applies `transform` to the whole list and replaces it. The transform is
    /// expected to preserve venue ids and only touch comment trees and counts;
    /// removing a venue is tolerated but nothing here does it.
    pub fn update(&mut self, transform: impl FnOnce(Vec<Venue>) -> Vec<Venue>) {
        let venues = std::mem::take(&mut self.venues);
        self.venues = transform(venues);
    }

    /// Routes a single-venue mutation through `update`. Unknown ids come from
    /// stale closures in the UI, not real errors, so they only warn.
    pub fn update_venue(&mut self, id: &VenueId, f: impl FnOnce(&mut Venue)) {
        self.update(|mut venues| {
            match venues.iter_mut().find(|v| v.id == *id) {
                Some(v) => f(v),
                None => tracing::warn!(venue = %id, "update for venue not in store"),
            }
            venues
        });
    }
}
