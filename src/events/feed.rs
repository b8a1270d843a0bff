use std::{
    collections::HashSet,
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    time::{Duration, Instant},
};

use log::{debug, error, info, warn};
use tokio::runtime::Handle;

use crate::VeluxeError;

use super::{Event, EventId, EventsBackend, RsvpResponse};

/// Completion of a request issued on the network runtime.
enum FeedMessage {
    Fetched(Result<Vec<Event>, VeluxeError>),
    Rsvped {
        event_id: EventId,
        result: Result<RsvpResponse, VeluxeError>,
    },
}

/// Read-only slice of the feed handed to the experiences view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedView<'a> {
    pub events: &'a [Event],
    pub fetching: bool,
    pub pending_rsvps: &'a HashSet<EventId>,
    pub fetch_error: Option<&'a str>,
    pub rsvp_error: Option<&'a str>,
}

/// `EventFeedController` keeps the cached event list in sync with the backend.
///
/// Requests run on the network runtime and report back through a channel;
/// nothing changes until [`EventFeedController::poll`] is called from the
/// owning thread, so all state transitions happen in one place.
///
/// * A successful fetch replaces the whole list, in backend order.
/// * A failed fetch keeps the previous list (stale but available).
/// * An accepted RSVP triggers a full refetch; attendee counts are never
///   adjusted locally.
/// * A rejected or failed RSVP changes nothing but the RSVP error, which
///   fetches leave alone. The next accepted RSVP clears it.
/// * Only one fetch is in flight at a time. Fetch requests made meanwhile are
///   folded into a single follow-up fetch.
pub struct EventFeedController<B: EventsBackend> {
    backend: Arc<B>,
    runtime: Handle,
    user_id: String,
    sender: Sender<FeedMessage>,
    receiver: Receiver<FeedMessage>,
    events: Vec<Event>,
    fetch_in_flight: bool,
    refetch_queued: bool,
    pending_rsvps: HashSet<EventId>,
    fetches_issued: usize,
    fetch_error: Option<String>,
    rsvp_error: Option<String>,
}

impl<B: EventsBackend> EventFeedController<B> {
    pub fn new(backend: B, runtime: Handle, user_id: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            backend: Arc::new(backend),
            runtime,
            user_id: user_id.into(),
            sender,
            receiver,
            events: Vec::new(),
            fetch_in_flight: false,
            refetch_queued: false,
            pending_rsvps: HashSet::new(),
            fetches_issued: 0,
            fetch_error: None,
            rsvp_error: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Why the last fetch failed. Cleared by the next successful fetch.
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Why the last RSVP was rejected or failed.
    pub fn rsvp_error(&self) -> Option<&str> {
        self.rsvp_error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn is_rsvp_pending(&self, event_id: &EventId) -> bool {
        self.pending_rsvps.contains(event_id)
    }

    /// Whether any request is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.fetch_in_flight || self.refetch_queued || !self.pending_rsvps.is_empty()
    }

    /// Number of list requests sent to the backend so far.
    pub fn fetches_issued(&self) -> usize {
        self.fetches_issued
    }

    pub fn view(&self) -> FeedView<'_> {
        FeedView {
            events: &self.events,
            fetching: self.fetch_in_flight,
            pending_rsvps: &self.pending_rsvps,
            fetch_error: self.fetch_error.as_deref(),
            rsvp_error: self.rsvp_error.as_deref(),
        }
    }

    pub fn fetch_events(&mut self) {
        if self.fetch_in_flight {
            debug!("Event fetch already in flight, queueing a follow-up");
            self.refetch_queued = true;
            return;
        }

        self.fetch_in_flight = true;
        self.fetches_issued += 1;
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = backend.list_events().await;
            // the receiver only goes away with the controller
            let _ = sender.send(FeedMessage::Fetched(result));
        });
    }

    pub fn rsvp(&mut self, event_id: EventId) {
        if !self.pending_rsvps.insert(event_id.clone()) {
            debug!("RSVP for event {event_id} already in flight");
            return;
        }

        info!("RSVP to event {event_id} as {}", self.user_id);
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        let user_id = self.user_id.clone();
        self.runtime.spawn(async move {
            let result = backend.rsvp(&event_id, &user_id).await;
            let _ = sender.send(FeedMessage::Rsvped { event_id, result });
        });
    }

    /// Apply every completed request without blocking. Returns how many
    /// completions were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    /// Block until no request is outstanding or `timeout` elapses.
    /// Returns `true` if the feed went idle.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(message) => self.apply(message),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return false;
                }
            }
        }
        true
    }

    /// Optionally RSVP, then make sure the list has been fetched once, blocking
    /// the caller. Returns `false` as soon as a step gets no answer within
    /// `timeout`; later steps are skipped.
    pub fn sync_blocking(&mut self, rsvp: Option<EventId>, timeout: Duration) -> bool {
        if let Some(event_id) = rsvp {
            self.rsvp(event_id);
            if !self.wait_until_idle(timeout) {
                warn!("Backend did not answer the RSVP within {timeout:?}");
                return false;
            }
        }
        // an accepted RSVP has already refreshed the list
        if self.fetches_issued == 0 {
            self.fetch_events();
            if !self.wait_until_idle(timeout) {
                warn!("Backend did not answer within {timeout:?}");
                return false;
            }
        }
        true
    }

    fn apply(&mut self, message: FeedMessage) {
        match message {
            FeedMessage::Fetched(result) => {
                self.fetch_in_flight = false;
                match result {
                    Ok(events) => {
                        info!("Loaded {} events", events.len());
                        self.events = events;
                        self.fetch_error = None;
                    }
                    Err(e) => {
                        error!(
                            "Error fetching events, keeping {} cached: {}",
                            self.events.len(),
                            e
                        );
                        self.fetch_error = Some(e.to_string());
                    }
                }
                if self.refetch_queued {
                    self.refetch_queued = false;
                    self.fetch_events();
                }
            }
            FeedMessage::Rsvped { event_id, result } => {
                self.pending_rsvps.remove(&event_id);
                match result {
                    Ok(RsvpResponse { success: true, .. }) => {
                        info!("RSVP to event {event_id} accepted, refreshing events");
                        self.rsvp_error = None;
                        self.fetch_events();
                    }
                    Ok(RsvpResponse {
                        success: false,
                        message,
                    }) => {
                        let e = VeluxeError::RsvpRejected {
                            event_id: event_id.to_string(),
                            message: message.unwrap_or_else(|| "no reason given".to_string()),
                        };
                        warn!("{e}");
                        self.rsvp_error = Some(e.to_string());
                    }
                    Err(e) => {
                        error!("Error sending RSVP for event {event_id}: {e}");
                        self.rsvp_error = Some(e.to_string());
                    }
                }
            }
        }
    }
}
