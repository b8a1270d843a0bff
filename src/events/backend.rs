use std::{
    collections::VecDeque,
    future::Future,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use log::debug;
use serde::de::DeserializeOwned;

use crate::VeluxeError;

use super::{Event, EventId, RsvpRequest, RsvpResponse};

/// The two concierge endpoints the client talks to.
///
/// Implementations are shared with the network runtime, so calls may run on a
/// worker thread while the UI keeps drawing. Every failure is reported as a
/// [`VeluxeError`]; callers decide how to absorb it.
pub trait EventsBackend: Send + Sync + 'static {
    /// `GET /api/events`. The returned order is the backend's.
    fn list_events(&self) -> impl Future<Output = Result<Vec<Event>, VeluxeError>> + Send;

    /// `POST /api/events/{event_id}/rsvp` on behalf of `user_id`.
    fn rsvp(
        &self,
        event_id: &EventId,
        user_id: &str,
    ) -> impl Future<Output = Result<RsvpResponse, VeluxeError>> + Send;
}

/// [`EventsBackend`] over HTTP with JSON bodies.
pub struct HttpEventsBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEventsBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    pub(crate) fn rsvp_url(&self, event_id: &EventId) -> String {
        format!("{}/api/events/{}/rsvp", self.base_url, event_id)
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, VeluxeError> {
        let response = request
            .send()
            .await
            .map_err(|e| VeluxeError::BackendRequest { source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VeluxeError::BackendStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| VeluxeError::MalformedResponse { source: e })
    }
}

impl EventsBackend for HttpEventsBackend {
    async fn list_events(&self) -> Result<Vec<Event>, VeluxeError> {
        let url = self.events_url();
        debug!("GET {url}");
        Self::send(self.client.get(url)).await
    }

    async fn rsvp(&self, event_id: &EventId, user_id: &str) -> Result<RsvpResponse, VeluxeError> {
        let url = self.rsvp_url(event_id);
        debug!("POST {url} as {user_id}");
        // deployed backends read user_id from the query string, newer ones
        // from the body
        let request = self
            .client
            .post(url)
            .query(&[("user_id", user_id)])
            .json(&RsvpRequest { user_id });
        Self::send(request).await
    }
}

/// In-memory [`EventsBackend`] that replays queued replies in order.
///
/// A `None` reply, or an exhausted queue, answers like an unavailable backend
/// (status 503). Every call is recorded so the request pattern can be checked
/// afterwards.
#[derive(Default)]
pub struct ScriptedEventsBackend {
    list_replies: Mutex<VecDeque<Option<Vec<Event>>>>,
    rsvp_replies: Mutex<VecDeque<Option<RsvpResponse>>>,
    list_calls: AtomicUsize,
    rsvp_calls: Mutex<Vec<(EventId, String)>>,
}

impl ScriptedEventsBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_events(self, events: Vec<Event>) -> Self {
        self.push_list_reply(Some(events));
        self
    }

    pub fn fail_events(self) -> Self {
        self.push_list_reply(None);
        self
    }

    pub fn reply_rsvp(self, success: bool) -> Self {
        self.push_rsvp_reply(Some(RsvpResponse {
            success,
            message: None,
        }));
        self
    }

    pub fn fail_rsvp(self) -> Self {
        self.push_rsvp_reply(None);
        self
    }

    pub fn push_list_reply(&self, reply: Option<Vec<Event>>) {
        if let Ok(mut replies) = self.list_replies.lock() {
            replies.push_back(reply);
        }
    }

    pub fn push_rsvp_reply(&self, reply: Option<RsvpResponse>) {
        if let Ok(mut replies) = self.rsvp_replies.lock() {
            replies.push_back(reply);
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn rsvp_calls(&self) -> Vec<(EventId, String)> {
        self.rsvp_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn unavailable(url: &str) -> VeluxeError {
        VeluxeError::BackendStatus {
            status: 503,
            url: url.to_string(),
        }
    }
}

impl EventsBackend for ScriptedEventsBackend {
    async fn list_events(&self) -> Result<Vec<Event>, VeluxeError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .list_replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .flatten();
        reply.ok_or_else(|| Self::unavailable("scripted://api/events"))
    }

    async fn rsvp(&self, event_id: &EventId, user_id: &str) -> Result<RsvpResponse, VeluxeError> {
        if let Ok(mut calls) = self.rsvp_calls.lock() {
            calls.push((event_id.clone(), user_id.to_string()));
        }
        let reply = self
            .rsvp_replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .flatten();
        reply.ok_or_else(|| Self::unavailable("scripted://api/events/rsvp"))
    }
}
