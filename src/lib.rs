// Library interface for veluxe
// This allows integration tests and benches to access the client state

pub mod booking;
pub mod config;
pub mod errors;
pub mod events;
pub mod gauge;
pub mod health;
pub mod membership;
pub mod shell;

// Re-export commonly used types
pub use booking::{BookingFormState, BookingSelection, BookingSubmitter, ServiceKind, ServiceMode, TimeSlot};
pub use config::AppConfig;
pub use errors::VeluxeError;
pub use events::{Event, EventFeedController, EventId, EventsBackend, HttpEventsBackend};
pub use gauge::GaugeGeometry;
pub use shell::{AppShell, AppState, Tab, UiAction, ViewContent, ViewRegistry};
