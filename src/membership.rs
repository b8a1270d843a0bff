use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipTier {
    Basic,
    Premium,
    Elite,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::Basic,
        MembershipTier::Premium,
        MembershipTier::Elite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "Basic",
            MembershipTier::Premium => "Premium",
            MembershipTier::Elite => "Veluxe Elite",
        }
    }

    pub fn monthly_price(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "$29/mo",
            MembershipTier::Premium => "$79/mo",
            MembershipTier::Elite => "$149/mo",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            MembershipTier::Basic => &[
                "Basic maintenance reminders",
                "Service booking",
                "Email support",
            ],
            MembershipTier::Premium => &[
                "White-glove pickup",
                "AI health predictions",
                "Priority booking",
                "Phone support",
            ],
            MembershipTier::Elite => &[
                "All Premium features",
                "Exclusive events",
                "24/7 concierge",
                "Free detailing",
            ],
        }
    }

    pub fn is_popular(&self) -> bool {
        matches!(self, MembershipTier::Premium)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    PushNotifications,
    EmailUpdates,
    LocationServices,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::PushNotifications,
        Preference::EmailUpdates,
        Preference::LocationServices,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preference::PushNotifications => "Push Notifications",
            Preference::EmailUpdates => "Email Updates",
            Preference::LocationServices => "Location Services",
        }
    }
}

/// Member preferences. Held for the session only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub push_notifications: bool,
    pub email_updates: bool,
    pub location_services: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            push_notifications: true,
            email_updates: false,
            location_services: true,
        }
    }
}

impl Preferences {
    pub fn is_enabled(&self, preference: Preference) -> bool {
        match preference {
            Preference::PushNotifications => self.push_notifications,
            Preference::EmailUpdates => self.email_updates,
            Preference::LocationServices => self.location_services,
        }
    }

    pub fn toggle(&mut self, preference: Preference) {
        let flag = match preference {
            Preference::PushNotifications => &mut self.push_notifications,
            Preference::EmailUpdates => &mut self.email_updates,
            Preference::LocationServices => &mut self.location_services,
        };
        *flag = !*flag;
    }
}

/// Plan changes have no backend endpoint; the choice is only logged.
pub fn choose_plan(current: MembershipTier, chosen: MembershipTier) {
    if current == chosen {
        info!("Already on the {} plan", current.name());
    } else {
        info!(
            "Plan change from {} to {} requested, no membership endpoint available",
            current.name(),
            chosen.name()
        );
    }
}
