//! Screen navigation state machine.
//!
//! Owns view context only: the current screen and the draft buffer behind the
//! create/update forms. Screens that need a selection carry the `EventId` in the
//! variant, so they cannot be entered without one.
//!
//! ```text
//! Auth -> Home -> { EventDetails, Stats }
//! EventDetails -> { UpdateEvent, Home }
//! UpdateEvent -> Home
//! ```

use crate::domain::{DomainError, EventDraft, EventId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Auth,
    Home,
    EventDetails {
        event_id: EventId,
    },
    UpdateEvent {
        event_id: EventId,
    },
    Stats,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Auth => "auth",
            Screen::Home => "home",
            Screen::EventDetails { .. } => "event details",
            Screen::UpdateEvent { .. } => "update event",
            Screen::Stats => "stats",
        }
    }

    /// Selected event, when the screen is scoped to one.
    pub fn selected_event(&self) -> Option<&EventId> {
        match self {
            Screen::EventDetails { event_id } | Screen::UpdateEvent { event_id } => Some(event_id),
            _ => None,
        }
    }
}

/// User actions that move between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    LoginSucceeded,
    SelectEvent(EventId),
    EventCreated,
    ViewStats,
    /// Enter the update form with the draft preloaded from the selected event.
    RequestUpdate(EventDraft),
    EventUpdated,
    Back,
}

impl Trigger {
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::LoginSucceeded => "log in",
            Trigger::SelectEvent(_) => "select an event",
            Trigger::EventCreated => "create an event",
            Trigger::ViewStats => "view stats",
            Trigger::RequestUpdate(_) => "request an update",
            Trigger::EventUpdated => "update an event",
            Trigger::Back => "go back",
        }
    }
}

/// Current screen plus the draft buffer. Starts at `Auth` with an empty draft.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
    draft: EventDraft,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    /// Screen `trigger` would lead to, without changing anything.
    fn target(&self, trigger: &Trigger) -> Result<Screen, DomainError> {
        let next = match (&self.screen, trigger) {
            (Screen::Auth, Trigger::LoginSucceeded) => Screen::Home,
            (Screen::Home, Trigger::SelectEvent(event_id)) => Screen::EventDetails {
                event_id: event_id.clone(),
            },
            (Screen::Home, Trigger::EventCreated) => Screen::Home,
            (Screen::Home, Trigger::ViewStats) => Screen::Stats,
            (Screen::EventDetails { event_id }, Trigger::RequestUpdate(_)) => {
                Screen::UpdateEvent {
                    event_id: event_id.clone(),
                }
            }
            (Screen::UpdateEvent { .. }, Trigger::EventUpdated) => Screen::Home,
            (
                Screen::EventDetails { .. } | Screen::UpdateEvent { .. } | Screen::Stats,
                Trigger::Back,
            ) => Screen::Home,
            (from, trigger) => {
                return Err(DomainError::InvalidTransition {
                    from: from.name(),
                    trigger: trigger.name(),
                });
            }
        };
        Ok(next)
    }

    /// `Ok` when `trigger` is valid on the current screen.
    pub fn check(&self, trigger: &Trigger) -> Result<(), DomainError> {
        self.target(trigger).map(|_| ())
    }

    /// Applies a transition and its draft side effect. Triggers not valid on the
    /// current screen return `InvalidTransition` and change nothing.
    pub fn apply(&mut self, trigger: Trigger) -> Result<&Screen, DomainError> {
        let next = self.target(&trigger)?;
        match trigger {
            Trigger::EventCreated | Trigger::EventUpdated => self.draft.clear(),
            Trigger::RequestUpdate(draft) => self.draft = draft,
            _ => {}
        }
        tracing::debug!(from = self.screen.name(), to = next.name(), "screen transition");
        self.screen = next;
        Ok(&self.screen)
    }
}
