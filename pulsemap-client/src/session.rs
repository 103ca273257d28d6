use crate::api::{
    validate_text, Comment, CommentId, CommentTarget, Reply, Venue, VenueId, VoteDirection,
};
use crate::places::{Alert, AlertSubscriptions, SavedPlace, SavedPlaces};
use crate::search::{self, NearbyCategory, NearbyDestination, PopularPlace, SearchEntry};
use crate::sheet::{Sheet, SheetState};
use crate::store::VenueStore;
use crate::{fixtures, VoteLedger};

/// Owns all client state for one map screen and exposes the operations the
/// presentation layer calls into. Single-threaded by construction: every
/// operation runs to completion before the next UI event is handled, and each
/// either fully applies or is a no-op.
pub struct MapSession {
    store: VenueStore,
    ledger: VoteLedger,
    sheet: Sheet,
    saved: SavedPlaces,
    alert_subscriptions: AlertSubscriptions,
    alerts: Vec<Alert>,
    recents: Vec<SearchEntry>,
    nearby_config: Vec<(VenueId, u32)>,
    popular_ids: Vec<VenueId>,
}

impl MapSession {
    pub fn new(store: VenueStore) -> MapSession {
        MapSession {
            store,
            ledger: VoteLedger::new(),
            sheet: Sheet::new(),
            saved: SavedPlaces::new(),
            alert_subscriptions: AlertSubscriptions::new(),
            alerts: Vec::new(),
            recents: Vec::new(),
            nearby_config: Vec::new(),
            popular_ids: Vec::new(),
        }
    }

    /// A session over the embedded Philadelphia sample data, seeded the way
    /// the app starts: a few saved places, two alerted venues, the alert feed.
    pub fn with_sample_data() -> anyhow::Result<MapSession> {
        let store = VenueStore::load(fixtures::sample_venues()?, &fixtures::map_bounds())?;
        let saved = fixtures::default_saved_place_ids()
            .iter()
            .filter_map(|id| store.venue(id))
            .map(SavedPlace::of)
            .collect();
        let mut session = MapSession::new(store);
        session.saved = SavedPlaces::seeded(saved);
        session.alert_subscriptions =
            AlertSubscriptions::seeded(fixtures::default_alerted_venue_ids());
        session.alerts = fixtures::alerts();
        session.recents = fixtures::recent_places();
        session.nearby_config = fixtures::nearby_destination_config();
        session.popular_ids = fixtures::popular_now_ids();
        Ok(session)
    }

    // ---- reads ----

    pub fn venues(&self) -> &[Venue] {
        self.store.venues()
    }

    pub fn store(&self) -> &VenueStore {
        &self.store
    }

    pub fn sheet_state(&self) -> SheetState {
        self.sheet.state()
    }

    /// Re-derived from the store on every read, so a venue mutated in the
    /// same step is never observed stale.
    pub fn selected_venue(&self) -> Option<&Venue> {
        self.sheet.selected().and_then(|id| self.store.venue(id))
    }

    pub fn vote_of(&self, id: &CommentId) -> Option<VoteDirection> {
        self.ledger.get(id)
    }

    pub fn saved_places(&self) -> &[SavedPlace] {
        self.saved.all()
    }

    pub fn is_saved(&self, id: &VenueId) -> bool {
        self.saved.is_saved(id)
    }

    pub fn alerts_enabled(&self, id: &VenueId) -> bool {
        self.alert_subscriptions.contains(id)
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn search(&self, query: &str) -> Vec<SearchEntry> {
        if query.trim().is_empty() {
            return self.recents.clone();
        }
        search::search_venues(self.store.venues(), query)
    }

    pub fn nearby_categories(&self) -> Vec<NearbyCategory> {
        fixtures::nearby_categories()
    }

    pub fn nearby_destinations(&self) -> Vec<NearbyDestination> {
        search::nearby_destinations(self.store.venues(), &self.nearby_config)
    }

    pub fn popular_now(&self) -> Vec<PopularPlace> {
        search::popular_now(self.store.venues(), &self.popular_ids)
    }

    // ---- selection / sheet ----

    pub fn set_visibility_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.sheet.set_visibility_listener(listener);
    }

    pub fn select_venue(&mut self, id: &VenueId) {
        if !self.store.contains(id) {
            tracing::warn!(venue = %id, "selecting venue not in store");
            return;
        }
        self.sheet.select(id.clone());
    }

    /// Deep link from the alerts or search screens. A known venue opens the
    /// sheet at full height directly; an unknown one changes nothing. Either
    /// way `on_handled` runs exactly once so the caller can clear its pending
    /// request.
    pub fn external_open(&mut self, id: &VenueId, on_handled: impl FnOnce()) {
        if self.store.contains(id) {
            self.sheet.open_full(id.clone());
        } else {
            tracing::warn!(venue = %id, "external open for venue not in store");
        }
        on_handled();
    }

    pub fn request_close(&mut self) {
        self.sheet.close();
    }

    pub fn resolve_drag(&mut self, delta: f64) {
        self.sheet.resolve_drag(delta);
    }

    // ---- comment tree ----

    /// Prepends a fresh local-user comment to the venue's thread. Callers
    /// normally disable the submit affordance for empty input, but the engine
    /// rejects it again here.
    pub fn post_comment(&mut self, venue: &VenueId, text: &str) {
        let text = text.trim();
        if let Err(err) = validate_text(text) {
            tracing::debug!(%err, "rejecting comment");
            return;
        }
        self.store
            .update_venue(venue, |v| v.prepend_comment(Comment::now(text)));
    }

    pub fn post_reply(&mut self, venue: &VenueId, parent: &CommentId, text: &str) {
        let text = text.trim();
        if let Err(err) = validate_text(text) {
            tracing::debug!(%err, "rejecting reply");
            return;
        }
        self.store.update_venue(venue, |v| {
            if !v.append_reply(parent, Reply::now(text)) {
                tracing::warn!(comment = %parent.0, "reply to comment not in venue");
            }
        });
    }

    /// Edits in place. Authorship is not checked here; the UI only offers the
    /// edit affordance on the local user's comments.
    pub fn edit_comment(&mut self, venue: &VenueId, target: &CommentTarget, text: &str) {
        let text = text.trim();
        if let Err(err) = validate_text(text) {
            tracing::debug!(%err, "rejecting edit");
            return;
        }
        self.store.update_venue(venue, |v| {
            if !v.edit_text(target, text) {
                tracing::warn!(comment = %target.id().0, "edit for comment not in venue");
            }
        });
    }

    /// Deletes the addressed comment or reply. The caller is expected to have
    /// confirmed intent with the user already; no prompt happens here. Ledger
    /// entries are swept for the deleted id and, unlike the original UI (which
    /// leaked them), for every reply discarded with a top-level comment.
    pub fn delete_comment(&mut self, venue: &VenueId, target: &CommentTarget) {
        let mut removed = None;
        self.store.update_venue(venue, |v| removed = v.remove(target));
        match removed {
            Some(r) => {
                self.ledger.clear(&r.id);
                self.ledger.clear_many(&r.reply_ids);
            }
            None => tracing::warn!(comment = %target.id().0, "delete for comment not in venue"),
        }
    }

    /// One active vote per comment. Re-clicking the held direction is a no-op
    /// (there is no path back to "no vote"); the opposite direction flips the
    /// vote, shifting both tallies.
    pub fn vote(&mut self, venue: &VenueId, target: &CommentTarget, direction: VoteDirection) {
        let id = *target.id();
        let prior = self.ledger.get(&id);
        if prior == Some(direction) {
            return;
        }
        let mut applied = false;
        self.store
            .update_venue(venue, |v| applied = v.apply_vote(target, prior, direction));
        if applied {
            self.ledger.set(id, direction);
        } else {
            tracing::warn!(comment = %id.0, "vote for comment not in venue");
        }
    }

    // ---- saved places / alerts ----

    pub fn toggle_saved_place(&mut self, id: &VenueId) {
        match self.store.venue(id) {
            Some(v) => {
                self.saved.toggle(v);
            }
            None => tracing::warn!(venue = %id, "toggling save for venue not in store"),
        }
    }

    pub fn toggle_alert_subscription(&mut self, id: &VenueId) {
        self.alert_subscriptions.toggle(id);
    }
}
