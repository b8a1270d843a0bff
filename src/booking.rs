use std::{fmt, str::FromStr};

use log::info;

use crate::VeluxeError;

/// How the car reaches the workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceMode {
    #[default]
    WhiteGlove,
    InGarage,
}

impl ServiceMode {
    pub const ALL: [ServiceMode; 2] = [ServiceMode::WhiteGlove, ServiceMode::InGarage];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceMode::WhiteGlove => "white-glove",
            ServiceMode::InGarage => "in-garage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceMode::WhiteGlove => "White-Glove Pickup",
            ServiceMode::InGarage => "In-Garage Service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    Maintenance,
    Detailing,
    TireChange,
    OilChange,
    BrakeService,
    Battery,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Maintenance,
        ServiceKind::Detailing,
        ServiceKind::TireChange,
        ServiceKind::OilChange,
        ServiceKind::BrakeService,
        ServiceKind::Battery,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceKind::Maintenance => "maintenance",
            ServiceKind::Detailing => "detailing",
            ServiceKind::TireChange => "tire-change",
            ServiceKind::OilChange => "oil-change",
            ServiceKind::BrakeService => "brake-service",
            ServiceKind::Battery => "battery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Maintenance => "General Maintenance",
            ServiceKind::Detailing => "Premium Detailing",
            ServiceKind::TireChange => "Tire Change/Rotation",
            ServiceKind::OilChange => "Oil Change",
            ServiceKind::BrakeService => "Brake Service",
            ServiceKind::Battery => "Battery Service",
        }
    }
}

/// Bookable appointment start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Nine,
    Ten,
    Eleven,
    Two,
    Three,
    Four,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Nine,
        TimeSlot::Ten,
        TimeSlot::Eleven,
        TimeSlot::Two,
        TimeSlot::Three,
        TimeSlot::Four,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TimeSlot::Nine => "09:00",
            TimeSlot::Ten => "10:00",
            TimeSlot::Eleven => "11:00",
            TimeSlot::Two => "14:00",
            TimeSlot::Three => "15:00",
            TimeSlot::Four => "16:00",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Nine => "9:00 AM",
            TimeSlot::Ten => "10:00 AM",
            TimeSlot::Eleven => "11:00 AM",
            TimeSlot::Two => "2:00 PM",
            TimeSlot::Three => "3:00 PM",
            TimeSlot::Four => "4:00 PM",
        }
    }
}

macro_rules! parse_by_id {
    ($ty:ty, $field:literal) => {
        impl FromStr for $ty {
            type Err = VeluxeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .find(|v| v.id() == s)
                    .copied()
                    .ok_or_else(|| VeluxeError::InvalidUserInput {
                        field: $field.to_string(),
                        reason: format!("unknown value '{s}'"),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

parse_by_id!(ServiceMode, "service_mode");
parse_by_id!(ServiceKind, "service_kind");
parse_by_id!(TimeSlot, "time");

/// The in-progress service booking. Every field is independent of the others.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingSelection {
    pub service_mode: ServiceMode,
    pub service_kind: ServiceKind,
    /// ISO calendar date (`YYYY-MM-DD`), empty until the member picks one.
    pub date: String,
    pub time: Option<TimeSlot>,
    pub notes: String,
}

/// Receives a booking when the member confirms it.
///
/// There is no confirmation endpoint on the concierge backend yet, so the
/// only implementation shipped is [`UnconfirmedBooking`]. A networked
/// submitter plugs in through [`BookingFormState::with_submitter`] without
/// touching the form state.
pub trait BookingSubmitter {
    fn submit(&mut self, selection: &BookingSelection);
}

/// Logs the booking and sends nothing.
#[derive(Debug, Default)]
pub struct UnconfirmedBooking;

impl BookingSubmitter for UnconfirmedBooking {
    fn submit(&mut self, selection: &BookingSelection) {
        info!(
            "Booking confirmation has no backend endpoint, not sending {} ({}) on {} at {}",
            selection.service_kind,
            selection.service_mode,
            if selection.date.is_empty() { "<no date>" } else { selection.date.as_str() },
            selection.time.map(|t| t.id()).unwrap_or("<no time>"),
        );
    }
}

pub struct BookingFormState {
    selection: BookingSelection,
    submitter: Box<dyn BookingSubmitter>,
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::with_submitter(Box::new(UnconfirmedBooking))
    }
}

impl fmt::Debug for BookingFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingFormState")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl BookingFormState {
    pub fn with_submitter(submitter: Box<dyn BookingSubmitter>) -> Self {
        Self {
            selection: BookingSelection::default(),
            submitter,
        }
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn set_service_mode(&mut self, mode: ServiceMode) {
        self.selection.service_mode = mode;
    }

    pub fn set_service_kind(&mut self, kind: ServiceKind) {
        self.selection.service_kind = kind;
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.selection.date = date.into();
    }

    pub fn set_time(&mut self, time: Option<TimeSlot>) {
        self.selection.time = time;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.selection.notes = notes.into();
    }

    /// Hand the current selection to the submitter. The form keeps its values.
    pub fn submit(&mut self) {
        self.submitter.submit(&self.selection);
    }
}
