// End-to-end tests of the app shell driven through UI actions, with a
// scripted backend standing in for the concierge service.

use std::time::Duration;

use veluxe::booking::{BookingSelection, BookingSubmitter};
use veluxe::events::{ScriptedEventsBackend, network_runtime};
use veluxe::membership::Preference;
use veluxe::{
    AppShell, AppState, BookingFormState, Event, EventFeedController, EventId, ServiceKind,
    ServiceMode, Tab, TimeSlot, UiAction, ViewContent,
};

use std::sync::{Arc, Mutex};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

fn event(id: &str, event_type: &str, current: u32) -> Event {
    Event {
        id: EventId::from(id),
        title: format!("Event {id}"),
        description: String::new(),
        event_type: event_type.to_string(),
        date: "2024-07-25".to_string(),
        location: "Laguna Seca Raceway, CA".to_string(),
        max_attendees: 50,
        current_attendees: current,
        brands_filter: vec!["Porsche".to_string()],
    }
}

#[derive(Clone, Default)]
struct SharedSubmitter {
    submitted: Arc<Mutex<Vec<BookingSelection>>>,
}

impl BookingSubmitter for SharedSubmitter {
    fn submit(&mut self, selection: &BookingSelection) {
        self.submitted.lock().unwrap().push(selection.clone());
    }
}

#[test]
fn test_experiences_view_follows_feed() {
    let rt = network_runtime().unwrap();
    let backend = ScriptedEventsBackend::new()
        .reply_events(vec![event("e1", "track-day", 23), event("e2", "exclusive", 5)])
        .reply_rsvp(true)
        .reply_events(vec![event("e1", "track-day", 24), event("e2", "exclusive", 5)]);
    let mut shell = AppShell::new(EventFeedController::new(
        backend,
        rt.handle().clone(),
        "demo-user",
    ));
    shell.select_tab_by_id("experiences");

    match shell.render() {
        ViewContent::Experiences { feed } => assert!(feed.events.is_empty()),
        other => panic!("Expected experiences view, got {:?}", other.tab()),
    }

    shell.start();
    assert!(shell.state_mut().feed.wait_until_idle(SETTLE_TIMEOUT));
    shell.apply(UiAction::Rsvp(EventId::from("e1")));
    // a second tap while the first is pending is dropped
    shell.apply(UiAction::Rsvp(EventId::from("e1")));
    assert!(shell.is_syncing());
    assert!(shell.state_mut().feed.wait_until_idle(SETTLE_TIMEOUT));

    match shell.render() {
        ViewContent::Experiences { feed } => {
            assert_eq!(feed.events.len(), 2);
            assert_eq!(feed.events[0].current_attendees, 24);
            assert!(feed.pending_rsvps.is_empty());
            assert!(!feed.fetching);
            assert_eq!(feed.fetch_error, None);
            assert_eq!(feed.rsvp_error, None);
        }
        other => panic!("Expected experiences view, got {:?}", other.tab()),
    }
    assert_eq!(
        shell.state().feed.backend().rsvp_calls(),
        vec![(EventId::from("e1"), "demo-user".to_string())]
    );
}

#[test]
fn test_booking_survives_navigation_and_submits() {
    let rt = network_runtime().unwrap();
    let submitter = SharedSubmitter::default();
    let mut state = AppState::new(EventFeedController::new(
        ScriptedEventsBackend::new(),
        rt.handle().clone(),
        "demo-user",
    ));
    state.booking = BookingFormState::with_submitter(Box::new(submitter.clone()));
    let mut shell = AppShell::with_state(state);

    shell.apply(UiAction::SelectTab(Tab::Services));
    shell.apply(UiAction::SetServiceMode(ServiceMode::InGarage));
    shell.apply(UiAction::SetServiceKind(ServiceKind::TireChange));
    shell.apply(UiAction::SetTime(Some(TimeSlot::Two)));
    shell.apply(UiAction::SelectTab(Tab::Alerts));
    shell.apply(UiAction::TogglePreference(Preference::PushNotifications));
    shell.apply(UiAction::SelectTab(Tab::Services));
    shell.apply(UiAction::SetNotes("Use the side entrance".to_string()));
    shell.apply(UiAction::SubmitBooking);

    let submitted = submitter.submitted.lock().unwrap().clone();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].service_mode, ServiceMode::InGarage);
    assert_eq!(submitted[0].service_kind, ServiceKind::TireChange);
    assert_eq!(submitted[0].time, Some(TimeSlot::Two));
    assert_eq!(submitted[0].notes, "Use the side entrance");
    assert!(!shell.state().preferences.push_notifications);
}

#[test]
fn test_backend_outage_leaves_other_views_usable() {
    let rt = network_runtime().unwrap();
    let backend = ScriptedEventsBackend::new().fail_events();
    let mut shell = AppShell::new(EventFeedController::new(
        backend,
        rt.handle().clone(),
        "demo-user",
    ));
    shell.start();
    assert!(shell.state_mut().feed.wait_until_idle(SETTLE_TIMEOUT));

    match shell.render() {
        ViewContent::Home { health, .. } => assert_eq!(health.oil_status, 85),
        other => panic!("Expected home view, got {:?}", other.tab()),
    }
    shell.apply(UiAction::SelectTab(Tab::Experiences));
    match shell.render() {
        ViewContent::Experiences { feed } => {
            assert!(feed.events.is_empty());
            assert!(feed.fetch_error.is_some());
            assert_eq!(feed.rsvp_error, None);
        }
        other => panic!("Expected experiences view, got {:?}", other.tab()),
    }
}
