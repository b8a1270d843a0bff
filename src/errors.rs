// Error types for veluxe

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum VeluxeError {
    // Errors talking to the concierge backend
    #[snafu(display("Request to the concierge backend failed"))]
    BackendRequest { source: reqwest::Error },
    #[snafu(display("Backend answered {url} with status {status}"))]
    BackendStatus { status: u16, url: String },
    #[snafu(display("Could not decode backend response"))]
    MalformedResponse { source: reqwest::Error },
    #[snafu(display("RSVP for event {event_id} was not accepted: {message}"))]
    RsvpRejected { event_id: String, message: String },

    // Errors while setting up the async runtime used for network calls
    #[snafu(display("Could not start the network runtime"))]
    RuntimeInit { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to read config file"))]
    NoConfigDir,
    #[snafu(display("Error reading config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigParseError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },

    // UI errors
    #[snafu(display("Could not start the application window: {description}"))]
    GuiError { description: String },
}
