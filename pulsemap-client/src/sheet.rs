use crate::api::VenueId;

/// Vertical displacement (in px) below which a gesture counts as a tap.
pub const DRAG_THRESHOLD: f64 = 40.0;

/// Visual state of the venue detail sheet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SheetState {
    #[default]
    Closed,
    Peek,
    Full,
}

/// Selection and sheet state machine. Holds only the selected venue's id;
/// callers re-derive the venue snapshot from the store on every read, so
/// there is never a second copy to go stale.
pub struct Sheet {
    state: SheetState,
    selected: Option<VenueId>,
    on_visibility: Option<Box<dyn FnMut(bool)>>,
}

impl std::fmt::Debug for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sheet")
            .field("state", &self.state)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Default for Sheet {
    fn default() -> Sheet {
        Sheet::new()
    }
}

impl Sheet {
    pub fn new() -> Sheet {
        Sheet {
            state: SheetState::Closed,
            selected: None,
            on_visibility: None,
        }
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn selected(&self) -> Option<&VenueId> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state != SheetState::Closed
    }

    /// Registers the collaborator notified when open-ness changes; the
    /// surrounding navigation chrome uses the boolean to collapse itself.
    pub fn set_visibility_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_visibility = Some(Box::new(listener));
    }

    fn set_state(&mut self, state: SheetState) {
        let was_open = self.is_open();
        self.state = state;
        let now_open = self.is_open();
        if was_open != now_open {
            if let Some(notify) = &mut self.on_visibility {
                notify(now_open);
            }
        }
    }

    /// Selecting from the map opens the sheet at peek height.
    pub fn select(&mut self, venue: VenueId) {
        tracing::debug!(venue = %venue, "venue selected");
        self.selected = Some(venue);
        self.set_state(SheetState::Peek);
    }

    /// A deep link (alerts, search) jumps straight to full height.
    pub fn open_full(&mut self, venue: VenueId) {
        tracing::debug!(venue = %venue, "venue opened full");
        self.selected = Some(venue);
        self.set_state(SheetState::Full);
    }

    /// Closes the sheet and drops the selection immediately. The original UI
    /// keeps the last venue around for ~280ms to play the exit animation; with
    /// no animation layer the sheet state itself is the visibility flag, so
    /// nothing lingers.
    pub fn close(&mut self) {
        self.set_state(SheetState::Closed);
        self.selected = None;
    }

    /// Resolves a completed drag gesture. Upward past the threshold forces
    /// full; downward past it demotes full to peek or closes from peek; a tap
    /// toggles between the two open heights.
    pub fn resolve_drag(&mut self, delta: f64) {
        if !self.is_open() {
            return;
        }
        if delta < -DRAG_THRESHOLD {
            self.set_state(SheetState::Full);
        } else if delta > DRAG_THRESHOLD {
            match self.state {
                SheetState::Full => self.set_state(SheetState::Peek),
                _ => self.close(),
            }
        } else {
            match self.state {
                SheetState::Peek => self.set_state(SheetState::Full),
                SheetState::Full => self.set_state(SheetState::Peek),
                SheetState::Closed => (),
            }
        }
    }
}
