//! Application context: the action handlers behind every screen.
//!
//! Constructed once at startup and passed to the presentation adapter. Owns the
//! user directory (via `AuthService`), the event repository, the session and the
//! navigator. Actions run one at a time: the navigator lock is held for the whole
//! handler, including the save.

use crate::domain::{
    DomainError, DraftField, Event, EventDraft, EventId, Navigator, Screen, Statistics, Trigger,
    User,
};
use crate::ports::SharePort;
use crate::usecases::{AuthService, EventRepository, PersistentStore, UserDirectory};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// The current screen resolved against the repository. Passive data for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Auth,
    Home {
        events: Vec<Event>,
        draft: EventDraft,
    },
    EventDetails {
        event: Event,
    },
    UpdateEvent {
        event: Event,
        draft: EventDraft,
    },
    Stats {
        stats: Statistics,
    },
}

/// Invitation text handed to the share capability.
pub fn share_message(event: &Event) -> String {
    format!(
        "You're invited to \"{}\"!\nDescription: {}\nDate: {}",
        event.title, event.description, event.date
    )
}

pub struct EventApp {
    auth: AuthService,
    events: EventRepository,
    share: Arc<dyn SharePort>,
    nav: Mutex<Navigator>,
}

impl EventApp {
    /// Builds the context and loads both persisted lists. `seed` is the account
    /// available before any directory has been saved.
    pub async fn bootstrap(
        store: PersistentStore,
        share: Arc<dyn SharePort>,
        seed: User,
    ) -> Result<Self, DomainError> {
        let app = Self {
            auth: AuthService::new(UserDirectory::new(store.clone(), vec![seed])),
            events: EventRepository::new(store),
            share,
            nav: Mutex::new(Navigator::new()),
        };
        let users = app.auth.load().await?;
        let events = app.events.load().await?;
        info!(users, events, "application ready");
        Ok(app)
    }

    pub async fn screen(&self) -> Screen {
        self.nav.lock().await.screen().clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.auth.current_user().await
    }

    /// Auth -> Home on matching credentials; sets the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let mut nav = self.nav.lock().await;
        nav.check(&Trigger::LoginSucceeded)?;
        let user = self.auth.authenticate(email, password).await?;
        nav.apply(Trigger::LoginSucceeded)?;
        self.auth.start_session(user.clone()).await;
        Ok(user)
    }

    /// Appends an account. No uniqueness or strength checks. Does not log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        self.auth.register(email, password).await
    }

    pub async fn draft(&self) -> EventDraft {
        self.nav.lock().await.draft().clone()
    }

    pub async fn edit_draft(&self, field: DraftField, value: impl Into<String>) {
        self.nav.lock().await.draft_mut().set(field, value);
    }

    pub async fn set_draft(&self, draft: EventDraft) {
        *self.nav.lock().await.draft_mut() = draft;
    }

    /// Creates an event from the draft and clears it. The draft is kept on failure.
    pub async fn create_event(&self) -> Result<Event, DomainError> {
        self.auth.require_user().await?;
        let mut nav = self.nav.lock().await;
        nav.check(&Trigger::EventCreated)?;
        let event = self.events.create(nav.draft()).await?;
        nav.apply(Trigger::EventCreated)?;
        Ok(event)
    }

    pub async fn select_event(&self, id: &EventId) -> Result<Event, DomainError> {
        self.auth.require_user().await?;
        let mut nav = self.nav.lock().await;
        let trigger = Trigger::SelectEvent(id.clone());
        nav.check(&trigger)?;
        let event = self
            .events
            .get(id)
            .await
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;
        nav.apply(trigger)?;
        Ok(event)
    }

    /// EventDetails -> UpdateEvent with the draft preloaded from the selected event.
    pub async fn request_update(&self) -> Result<EventDraft, DomainError> {
        self.auth.require_user().await?;
        let mut nav = self.nav.lock().await;
        let id = selected_on_details(nav.screen(), "request an update")?;
        let event = self
            .events
            .get(&id)
            .await
            .ok_or(DomainError::NotFound(id))?;
        let draft = event.to_draft();
        nav.apply(Trigger::RequestUpdate(draft.clone()))?;
        Ok(draft)
    }

    /// Saves the draft onto the selected event and returns to Home.
    pub async fn submit_update(&self) -> Result<Event, DomainError> {
        self.auth.require_user().await?;
        let mut nav = self.nav.lock().await;
        let Screen::UpdateEvent { event_id } = nav.screen() else {
            return Err(DomainError::InvalidTransition {
                from: nav.screen().name(),
                trigger: Trigger::EventUpdated.name(),
            });
        };
        let event_id = event_id.clone();
        let event = self.events.update(&event_id, nav.draft()).await?;
        nav.apply(Trigger::EventUpdated)?;
        Ok(event)
    }

    /// RSVP to the selected event as the logged-in user.
    pub async fn rsvp(&self) -> Result<Event, DomainError> {
        let user = self.auth.require_user().await?;
        let nav = self.nav.lock().await;
        let id = selected_on_details(nav.screen(), "RSVP")?;
        self.events.add_attendee(&id, &user.email).await
    }

    pub async fn add_comment(&self, text: &str) -> Result<Event, DomainError> {
        let user = self.auth.require_user().await?;
        let nav = self.nav.lock().await;
        let id = selected_on_details(nav.screen(), "comment")?;
        self.events.add_comment(&id, &user.email, text).await
    }

    /// Hands the selected event's invitation text to the share capability.
    /// Stored state is never affected.
    pub async fn share_selected(&self) -> Result<String, DomainError> {
        self.auth.require_user().await?;
        let nav = self.nav.lock().await;
        let id = selected_on_details(nav.screen(), "share")?;
        let event = self
            .events
            .get(&id)
            .await
            .ok_or(DomainError::NotFound(id))?;
        let message = share_message(&event);
        if let Err(e) = self.share.share(&message).await {
            warn!(event_id = %event.id, error = %e, "share failed");
            return Err(match e {
                DomainError::Share(reason) => DomainError::Share(reason),
                other => DomainError::Share(other.to_string()),
            });
        }
        info!(event_id = %event.id, "event shared");
        Ok(message)
    }

    pub async fn view_stats(&self) -> Result<Statistics, DomainError> {
        self.auth.require_user().await?;
        let mut nav = self.nav.lock().await;
        nav.apply(Trigger::ViewStats)?;
        Ok(Statistics::compute(&self.events.list().await))
    }

    pub async fn back(&self) -> Result<(), DomainError> {
        self.auth.require_user().await?;
        self.nav.lock().await.apply(Trigger::Back)?;
        Ok(())
    }

    pub async fn list_events(&self) -> Vec<Event> {
        self.events.list().await
    }

    /// Resolves the current screen. Selected events and statistics are re-read
    /// from the repository on every call.
    pub async fn view(&self) -> Result<View, DomainError> {
        let nav = self.nav.lock().await;
        let view = match nav.screen() {
            Screen::Auth => View::Auth,
            Screen::Home => View::Home {
                events: self.events.list().await,
                draft: nav.draft().clone(),
            },
            Screen::EventDetails { event_id } => View::EventDetails {
                event: self.resolve(event_id).await?,
            },
            Screen::UpdateEvent { event_id } => View::UpdateEvent {
                event: self.resolve(event_id).await?,
                draft: nav.draft().clone(),
            },
            Screen::Stats => View::Stats {
                stats: Statistics::compute(&self.events.list().await),
            },
        };
        Ok(view)
    }

    async fn resolve(&self, id: &EventId) -> Result<Event, DomainError> {
        self.events
            .get(id)
            .await
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }
}

fn selected_on_details(screen: &Screen, action: &'static str) -> Result<EventId, DomainError> {
    match screen {
        Screen::EventDetails { event_id } => Ok(event_id.clone()),
        other => Err(DomainError::InvalidTransition {
            from: other.name(),
            trigger: action,
        }),
    }
}
