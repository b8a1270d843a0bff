pub mod backend;
pub mod feed;

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};

use crate::VeluxeError;

pub use backend::{EventsBackend, HttpEventsBackend, ScriptedEventsBackend};
pub use feed::{EventFeedController, FeedView};

/// Backend identifier of an event. The backend hands out either strings or
/// numbers; the client never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Text(String),
    Number(i64),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Text(id) => f.write_str(id),
            EventId::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        EventId::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    TrackDay,
    Exclusive,
    General,
}

/// An owner event as served by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Raw category from the backend, e.g. `track-day`, `exclusive`, `meetup`.
    pub event_type: String,
    pub date: String,
    pub location: String,
    pub max_attendees: u32,
    #[serde(default)]
    pub current_attendees: u32,
    #[serde(default)]
    pub brands_filter: Vec<String>,
}

impl Event {
    pub fn category(&self) -> EventCategory {
        match self.event_type.as_str() {
            "track-day" => EventCategory::TrackDay,
            "exclusive" => EventCategory::Exclusive,
            _ => EventCategory::General,
        }
    }

    pub fn attendance_label(&self) -> String {
        format!(
            "{}/{} attending",
            self.current_attendees, self.max_attendees
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RsvpRequest<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Runtime that drives backend requests off the UI thread.
pub fn network_runtime() -> Result<Runtime, VeluxeError> {
    Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("veluxe-net")
        .enable_all()
        .build()
        .map_err(|e| VeluxeError::RuntimeInit { source: e })
}
