use crate::api::{Venue, VenueId};

const DEFAULT_CITY: &str = "Philadelphia";

/// A row of the search overlay, pointing back at a venue.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchEntry {
    pub venue_id: VenueId,
    pub title: String,
    pub city: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NearbyCategory {
    pub icon: String,
    pub label: String,
}

/// A venue within walking distance, shown on the places screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NearbyDestination {
    pub venue_id: VenueId,
    pub name: String,
    pub icon: String,
    pub count: usize,
    pub minutes: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PopularPlace {
    pub venue_id: VenueId,
    pub name: String,
    pub address: String,
    pub icon: String,
    pub count: usize,
}

fn city_of(venue: &Venue) -> String {
    venue
        .details
        .address
        .as_deref()
        .and_then(|a| a.rsplit(',').next())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CITY)
        .to_owned()
}

/// Case-insensitive substring match over "title city". Callers handle the
/// empty-query case (it shows recents, not results).
pub fn search_venues(venues: &[Venue], query: &str) -> Vec<SearchEntry> {
    let q = query.trim().to_lowercase();
    venues
        .iter()
        .filter_map(|v| {
            let city = city_of(v);
            let haystack = format!("{} {}", v.name, city).to_lowercase();
            haystack.contains(&q).then(|| SearchEntry {
                venue_id: v.id.clone(),
                title: v.name.clone(),
                city,
            })
        })
        .collect()
}

/// Resolves the walking-distance config against live venues; unknown ids are
/// skipped and counts are the live top-level comment counts.
pub fn nearby_destinations(venues: &[Venue], config: &[(VenueId, u32)]) -> Vec<NearbyDestination> {
    config
        .iter()
        .filter_map(|(id, minutes)| {
            let v = venues.iter().find(|v| v.id == *id)?;
            Some(NearbyDestination {
                venue_id: v.id.clone(),
                name: v.name.clone(),
                icon: v.icon.clone(),
                count: v.comments.len(),
                minutes: *minutes,
            })
        })
        .collect()
}

pub fn popular_now(venues: &[Venue], source_ids: &[VenueId]) -> Vec<PopularPlace> {
    source_ids
        .iter()
        .filter_map(|id| {
            let v = venues.iter().find(|v| v.id == *id)?;
            let address = v
                .details
                .address
                .as_deref()
                .and_then(|a| a.split(',').next())
                .unwrap_or("")
                .to_owned();
            Some(PopularPlace {
                venue_id: v.id.clone(),
                name: v.name.clone(),
                address,
                icon: v.icon.clone(),
                count: v.comments.len(),
            })
        })
        .collect()
}
