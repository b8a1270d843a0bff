pub mod registry;

use log::{info, warn};

use crate::booking::{BookingFormState, ServiceKind, ServiceMode, TimeSlot};
use crate::events::{EventFeedController, EventId, EventsBackend};
use crate::health::{
    MaintenancePrediction, VehicleHealthSnapshot, VehicleProfile, maintenance_predictions,
};
use crate::membership::{self, MembershipTier, Preference, Preferences};

pub use registry::{Tab, TabDescriptor, ViewContent, ViewData, ViewRegistry};

/// Something the member did in the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectTab(Tab),
    SetServiceMode(ServiceMode),
    SetServiceKind(ServiceKind),
    SetDate(String),
    SetTime(Option<TimeSlot>),
    SetNotes(String),
    SubmitBooking,
    Rsvp(EventId),
    TogglePreference(Preference),
    ChoosePlan(MembershipTier),
}

/// Everything the client knows for the current session.
pub struct AppState<B: EventsBackend> {
    pub active_tab: Tab,
    pub vehicle: VehicleProfile,
    pub health: VehicleHealthSnapshot,
    pub predictions: Vec<MaintenancePrediction>,
    pub booking: BookingFormState,
    pub feed: EventFeedController<B>,
    pub preferences: Preferences,
    pub current_plan: MembershipTier,
}

impl<B: EventsBackend> AppState<B> {
    pub fn new(feed: EventFeedController<B>) -> Self {
        Self {
            active_tab: Tab::default(),
            vehicle: VehicleProfile::default(),
            health: VehicleHealthSnapshot::default(),
            predictions: maintenance_predictions(),
            booking: BookingFormState::default(),
            feed,
            preferences: Preferences::default(),
            current_plan: MembershipTier::Premium,
        }
    }

    pub fn view_data(&self) -> ViewData<'_> {
        ViewData {
            vehicle: &self.vehicle,
            health: &self.health,
            predictions: &self.predictions,
            booking: self.booking.selection(),
            feed: self.feed.view(),
            preferences: &self.preferences,
            current_plan: self.current_plan,
        }
    }
}

/// `AppShell` owns the session state and routes UI actions to the component
/// that owns the affected data. It holds no business rules of its own.
pub struct AppShell<B: EventsBackend> {
    state: AppState<B>,
    started: bool,
}

impl<B: EventsBackend> AppShell<B> {
    pub fn new(feed: EventFeedController<B>) -> Self {
        Self::with_state(AppState::new(feed))
    }

    pub fn with_state(state: AppState<B>) -> Self {
        Self {
            state,
            started: false,
        }
    }

    /// Kick off the initial event fetch. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Starting concierge session on the {} tab", self.state.active_tab.id());
        self.state.feed.fetch_events();
    }

    /// Apply finished network requests. Call once per frame.
    pub fn poll(&mut self) -> usize {
        self.state.feed.poll()
    }

    pub fn is_syncing(&self) -> bool {
        self.state.feed.is_busy()
    }

    pub fn state(&self) -> &AppState<B> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState<B> {
        &mut self.state
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    pub fn select_tab_by_id(&mut self, id: &str) {
        let tab = Tab::from_id(id).unwrap_or_else(|| {
            warn!("Unknown tab '{id}', showing home");
            Tab::Home
        });
        self.select_tab(tab);
    }

    pub fn apply(&mut self, action: UiAction) {
        let state = &mut self.state;
        match action {
            UiAction::SelectTab(tab) => state.active_tab = tab,
            UiAction::SetServiceMode(mode) => state.booking.set_service_mode(mode),
            UiAction::SetServiceKind(kind) => state.booking.set_service_kind(kind),
            UiAction::SetDate(date) => state.booking.set_date(date),
            UiAction::SetTime(time) => state.booking.set_time(time),
            UiAction::SetNotes(notes) => state.booking.set_notes(notes),
            UiAction::SubmitBooking => state.booking.submit(),
            UiAction::Rsvp(event_id) => state.feed.rsvp(event_id),
            UiAction::TogglePreference(preference) => state.preferences.toggle(preference),
            UiAction::ChoosePlan(tier) => membership::choose_plan(state.current_plan, tier),
        }
    }

    pub fn render(&self) -> ViewContent<'_> {
        ViewRegistry::render_tab(self.state.active_tab, &self.state.view_data())
    }
}
