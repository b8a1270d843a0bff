// Integration tests for the HTTP events backend against a local axum server
//
// The server mimics the concierge endpoints and records every request it
// receives, so the tests can check both what the feed shows and what went
// over the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::runtime::Runtime;

use veluxe::events::network_runtime;
use veluxe::{EventFeedController, EventId, HttpEventsBackend};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

fn sample_events() -> Value {
    json!([
        {
            "id": "e1",
            "title": "Porsche Track Day",
            "description": "Exclusive track day at Laguna Seca for Porsche owners",
            "event_type": "track-day",
            "date": "2024-07-25",
            "location": "Laguna Seca Raceway, CA",
            "max_attendees": 50,
            "current_attendees": 23,
            "brands_filter": ["Porsche"]
        },
        {
            "id": 2,
            "title": "Tesla Owner Meetup",
            "event_type": "meetup",
            "date": "2024-08-05",
            "location": "Fremont, CA",
            "max_attendees": 100
        }
    ])
}

#[derive(Debug, Clone, PartialEq)]
enum Received {
    ListEvents,
    Rsvp {
        event_id: String,
        query_user_id: Option<String>,
        body_user_id: String,
    },
}

#[derive(Deserialize)]
struct RsvpQuery {
    user_id: Option<String>,
}

#[derive(Deserialize)]
struct RsvpBody {
    user_id: String,
}

/// Scripted concierge endpoints. List replies are consumed in order; once
/// they run out the list endpoint answers with the sample events.
#[derive(Default)]
struct Concierge {
    list_statuses: Mutex<VecDeque<StatusCode>>,
    rsvp_reply: Mutex<Option<Value>>,
    received: Mutex<Vec<Received>>,
}

impl Concierge {
    fn with_list_statuses(self, statuses: &[StatusCode]) -> Self {
        self.list_statuses.lock().unwrap().extend(statuses);
        self
    }

    fn with_rsvp_reply(self, reply: Value) -> Self {
        *self.rsvp_reply.lock().unwrap() = Some(reply);
        self
    }

    fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn list_events(State(concierge): State<Arc<Concierge>>) -> Response {
    concierge.received.lock().unwrap().push(Received::ListEvents);
    let status = concierge
        .list_statuses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(StatusCode::OK);
    if status.is_success() {
        (status, Json(sample_events())).into_response()
    } else {
        (status, Json(json!({"detail": "database offline"}))).into_response()
    }
}

async fn rsvp(
    State(concierge): State<Arc<Concierge>>,
    Path(event_id): Path<String>,
    Query(query): Query<RsvpQuery>,
    Json(body): Json<RsvpBody>,
) -> Json<Value> {
    concierge.received.lock().unwrap().push(Received::Rsvp {
        event_id,
        query_user_id: query.user_id,
        body_user_id: body.user_id,
    });
    let reply = concierge
        .rsvp_reply
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| json!({"success": true, "message": "RSVP successful"}));
    Json(reply)
}

/// Serve `concierge` on an ephemeral port of `rt` and return its base URL.
fn serve(rt: &Runtime, concierge: Arc<Concierge>) -> String {
    let router = Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{event_id}/rsvp", post(rsvp))
        .with_state(concierge);
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    rt.spawn(async move { axum::serve(listener, router).await });
    base_url
}

fn feed_for(
    rt: &Runtime,
    base_url: String,
    user_id: &str,
) -> EventFeedController<HttpEventsBackend> {
    EventFeedController::new(
        HttpEventsBackend::new(base_url),
        rt.handle().clone(),
        user_id,
    )
}

#[test]
fn test_events_are_listed_in_backend_order() {
    let rt = network_runtime().unwrap();
    let concierge = Arc::new(Concierge::default());
    let base_url = serve(&rt, Arc::clone(&concierge));
    let mut feed = feed_for(&rt, format!("{base_url}/"), "demo-user");

    feed.fetch_events();
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    assert_eq!(feed.fetch_error(), None);
    let ids: Vec<String> = feed.events().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["e1", "2"]);
    assert_eq!(feed.events()[1].current_attendees, 0);
    assert!(feed.events()[1].brands_filter.is_empty());
    assert_eq!(concierge.received(), vec![Received::ListEvents]);
}

#[test]
fn test_rsvp_sends_user_and_refreshes() {
    let rt = network_runtime().unwrap();
    let concierge = Arc::new(Concierge::default());
    let base_url = serve(&rt, Arc::clone(&concierge));
    let mut feed = feed_for(&rt, base_url, "member-42");

    feed.rsvp(EventId::from("e1"));
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    assert_eq!(feed.rsvp_error(), None);
    assert_eq!(feed.events().len(), 2);
    assert_eq!(
        concierge.received(),
        vec![
            Received::Rsvp {
                event_id: "e1".to_string(),
                query_user_id: Some("member-42".to_string()),
                body_user_id: "member-42".to_string(),
            },
            Received::ListEvents,
        ]
    );
}

#[test]
fn test_numeric_event_id_in_rsvp_path() {
    let rt = network_runtime().unwrap();
    let concierge = Arc::new(Concierge::default());
    let base_url = serve(&rt, Arc::clone(&concierge));
    let mut feed = feed_for(&rt, base_url, "demo-user");

    feed.rsvp(EventId::Number(2));
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    match &concierge.received()[0] {
        Received::Rsvp { event_id, .. } => assert_eq!(event_id, "2"),
        other => panic!("Expected an RSVP first, got {other:?}"),
    }
}

#[test]
fn test_server_error_keeps_previous_events() {
    let rt = network_runtime().unwrap();
    let concierge = Arc::new(
        Concierge::default()
            .with_list_statuses(&[StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR]),
    );
    let base_url = serve(&rt, Arc::clone(&concierge));
    let mut feed = feed_for(&rt, base_url, "demo-user");

    feed.fetch_events();
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));
    feed.fetch_events();
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    assert_eq!(feed.events().len(), 2);
    let error = feed.fetch_error().unwrap();
    assert!(error.contains("500"), "unexpected error: {error}");
}

#[test]
fn test_rejected_rsvp_is_reported_without_refresh() {
    let rt = network_runtime().unwrap();
    let concierge = Arc::new(
        Concierge::default().with_rsvp_reply(json!({"success": false, "message": "Event is full"})),
    );
    let base_url = serve(&rt, Arc::clone(&concierge));
    let mut feed = feed_for(&rt, base_url, "demo-user");

    feed.rsvp(EventId::Number(7));
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    assert_eq!(feed.fetches_issued(), 0);
    assert!(feed.rsvp_error().unwrap().contains("Event is full"));
    assert_eq!(concierge.received().len(), 1);

    // a later successful refresh keeps the rejection visible
    feed.fetch_events();
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));
    assert_eq!(feed.fetch_error(), None);
    assert!(feed.rsvp_error().unwrap().contains("Event is full"));
}

#[test]
fn test_unreachable_backend_is_absorbed() {
    let rt = network_runtime().unwrap();
    // bind then drop to get a port nothing listens on
    let port = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut feed = feed_for(&rt, format!("http://127.0.0.1:{port}"), "demo-user");

    feed.fetch_events();
    assert!(feed.wait_until_idle(SETTLE_TIMEOUT));

    assert!(feed.events().is_empty());
    assert!(feed.fetch_error().is_some());
    assert!(!feed.is_busy());
}
