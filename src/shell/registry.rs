use std::fmt;

use crate::booking::BookingSelection;
use crate::events::FeedView;
use crate::health::{MaintenancePrediction, VehicleHealthSnapshot, VehicleProfile};
use crate::membership::{MembershipTier, Preferences};

/// Top-level views reachable from the tab bar, in tab bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Services,
    Alerts,
    Experiences,
    Settings,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        ViewRegistry::descriptor(*self).id
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        ViewRegistry::select(id).map(|descriptor| descriptor.tab)
    }
}

/// Borrowed application state, as seen by the renderers.
#[derive(Debug, Clone, Copy)]
pub struct ViewData<'a> {
    pub vehicle: &'a VehicleProfile,
    pub health: &'a VehicleHealthSnapshot,
    pub predictions: &'a [MaintenancePrediction],
    pub booking: &'a BookingSelection,
    pub feed: FeedView<'a>,
    pub preferences: &'a Preferences,
    pub current_plan: MembershipTier,
}

/// A composed view: which screen to paint and the state slice it reads.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent<'a> {
    Home {
        vehicle: &'a VehicleProfile,
        health: &'a VehicleHealthSnapshot,
    },
    Services {
        booking: &'a BookingSelection,
    },
    Alerts {
        health: &'a VehicleHealthSnapshot,
        predictions: &'a [MaintenancePrediction],
    },
    Experiences {
        feed: FeedView<'a>,
    },
    Settings {
        current_plan: MembershipTier,
        preferences: &'a Preferences,
    },
}

impl ViewContent<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            ViewContent::Home { .. } => Tab::Home,
            ViewContent::Services { .. } => Tab::Services,
            ViewContent::Alerts { .. } => Tab::Alerts,
            ViewContent::Experiences { .. } => Tab::Experiences,
            ViewContent::Settings { .. } => Tab::Settings,
        }
    }
}

pub type Renderer = for<'a> fn(&ViewData<'a>) -> ViewContent<'a>;

pub struct TabDescriptor {
    pub tab: Tab,
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub renderer: Renderer,
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("tab", &self.tab)
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

fn render_home<'a>(data: &ViewData<'a>) -> ViewContent<'a> {
    ViewContent::Home {
        vehicle: data.vehicle,
        health: data.health,
    }
}

fn render_services<'a>(data: &ViewData<'a>) -> ViewContent<'a> {
    ViewContent::Services {
        booking: data.booking,
    }
}

fn render_alerts<'a>(data: &ViewData<'a>) -> ViewContent<'a> {
    ViewContent::Alerts {
        health: data.health,
        predictions: data.predictions,
    }
}

fn render_experiences<'a>(data: &ViewData<'a>) -> ViewContent<'a> {
    ViewContent::Experiences { feed: data.feed }
}

fn render_settings<'a>(data: &ViewData<'a>) -> ViewContent<'a> {
    ViewContent::Settings {
        current_plan: data.current_plan,
        preferences: data.preferences,
    }
}

// Order matches the `Tab` declaration, `descriptor` indexes by discriminant.
static TABS: [TabDescriptor; 5] = [
    TabDescriptor {
        tab: Tab::Home,
        id: "home",
        icon: "🏠",
        label: "Home",
        renderer: render_home,
    },
    TabDescriptor {
        tab: Tab::Services,
        id: "services",
        icon: "🔧",
        label: "Services",
        renderer: render_services,
    },
    TabDescriptor {
        tab: Tab::Alerts,
        id: "alerts",
        icon: "💡",
        label: "Alerts",
        renderer: render_alerts,
    },
    TabDescriptor {
        tab: Tab::Experiences,
        id: "experiences",
        icon: "🏁",
        label: "Events",
        renderer: render_experiences,
    },
    TabDescriptor {
        tab: Tab::Settings,
        id: "settings",
        icon: "⚙",
        label: "Settings",
        renderer: render_settings,
    },
];

/// Lookup table from tab ids to their renderers.
pub struct ViewRegistry;

impl ViewRegistry {
    pub fn tabs() -> &'static [TabDescriptor] {
        &TABS
    }

    pub fn select(id: &str) -> Option<&'static TabDescriptor> {
        TABS.iter().find(|descriptor| descriptor.id == id)
    }

    pub fn descriptor(tab: Tab) -> &'static TabDescriptor {
        &TABS[tab as usize]
    }

    /// Render the view for `active_id`. Unknown ids render the home view.
    pub fn render<'a>(active_id: &str, data: &ViewData<'a>) -> ViewContent<'a> {
        let descriptor = Self::select(active_id).unwrap_or(Self::descriptor(Tab::Home));
        (descriptor.renderer)(data)
    }

    pub fn render_tab<'a>(tab: Tab, data: &ViewData<'a>) -> ViewContent<'a> {
        (Self::descriptor(tab).renderer)(data)
    }
}
