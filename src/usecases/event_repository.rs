//! Event repository. Single source of truth for event records.
//!
//! - Every mutation saves the full list under the `events` key before returning
//! - Mutations run on a copy; the copy replaces the in-memory list only after the save succeeds
//! - The list lock is held across the save, so at most one write is in flight

use crate::domain::{Comment, DomainError, Event, EventDraft, EventId};
use crate::ports::EVENTS_KEY;
use crate::usecases::PersistentStore;
use tokio::sync::Mutex;
use tracing::info;

pub struct EventRepository {
    store: PersistentStore,
    events: Mutex<Vec<Event>>,
}

impl EventRepository {
    pub fn new(store: PersistentStore) -> Self {
        Self {
            store,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the in-memory list with the persisted one (empty when absent).
    pub async fn load(&self) -> Result<usize, DomainError> {
        let mut events = self.events.lock().await;
        *events = self.store.load_or_default(EVENTS_KEY).await?;
        info!(count = events.len(), "events loaded");
        Ok(events.len())
    }

    /// Runs `op` on a copy of the list, saves it, then swaps it in.
    async fn commit<R>(
        &self,
        op: impl FnOnce(&mut Vec<Event>) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let mut events = self.events.lock().await;
        let mut next = events.clone();
        let out = op(&mut next)?;
        self.store.save(EVENTS_KEY, &next).await?;
        *events = next;
        Ok(out)
    }

    fn find_mut<'a>(events: &'a mut [Event], id: &EventId) -> Result<&'a mut Event, DomainError> {
        events
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }

    /// Validates the draft, appends a new event with a fresh id.
    pub async fn create(&self, draft: &EventDraft) -> Result<Event, DomainError> {
        let event = Event::from_draft(draft)?;
        let created = self
            .commit(|events| {
                events.push(event.clone());
                Ok(event)
            })
            .await?;
        info!(event_id = %created.id, title = %created.title, "event created");
        Ok(created)
    }

    /// Replaces title/description/date of an existing event.
    pub async fn update(&self, id: &EventId, draft: &EventDraft) -> Result<Event, DomainError> {
        draft.validate()?;
        let updated = self
            .commit(|events| {
                let event = Self::find_mut(events, id)?;
                event.apply_draft(draft)?;
                Ok(event.clone())
            })
            .await?;
        info!(event_id = %id, "event updated");
        Ok(updated)
    }

    pub async fn get(&self, id: &EventId) -> Option<Event> {
        self.events
            .lock()
            .await
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    /// All events in insertion order.
    pub async fn list(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }

    /// Appends an RSVP. Repeat calls append repeat entries.
    pub async fn add_attendee(&self, id: &EventId, email: &str) -> Result<Event, DomainError> {
        let updated = self
            .commit(|events| {
                let event = Self::find_mut(events, id)?;
                event.attendees.push(email.to_string());
                Ok(event.clone())
            })
            .await?;
        info!(event_id = %id, email, attendees = updated.attendees.len(), "attendee added");
        Ok(updated)
    }

    pub async fn add_comment(
        &self,
        id: &EventId,
        email: &str,
        text: &str,
    ) -> Result<Event, DomainError> {
        let updated = self
            .commit(|events| {
                let event = Self::find_mut(events, id)?;
                event.comments.push(Comment {
                    user: email.to_string(),
                    text: text.to_string(),
                });
                Ok(event.clone())
            })
            .await?;
        info!(event_id = %id, email, comments = updated.comments.len(), "comment added");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::MemoryBlobStore;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn repo() -> (EventRepository, Arc<MemoryBlobStore>) {
        let blob = Arc::new(MemoryBlobStore::new());
        (
            EventRepository::new(PersistentStore::new(blob.clone())),
            blob,
        )
    }

    fn meetup() -> EventDraft {
        EventDraft::new("Meetup", "", "2024-01-01")
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids_and_empty_lists() {
        let (repo, blob) = repo();
        let mut ids = HashSet::new();
        for i in 0..20 {
            let e = repo
                .create(&EventDraft::new(format!("E{i}"), "", "2024-01-01"))
                .await
                .unwrap();
            assert!(e.attendees.is_empty());
            assert!(e.comments.is_empty());
            assert!(ids.insert(e.id));
        }
        assert_eq!(repo.list().await.len(), 20);
        assert_eq!(blob.write_count(), 20);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_title_or_date() {
        let (repo, blob) = repo();
        repo.create(&meetup()).await.unwrap();

        for draft in [
            EventDraft::new("", "desc", "2024-01-01"),
            EventDraft::new("Meetup", "desc", ""),
        ] {
            assert!(matches!(
                repo.create(&draft).await,
                Err(DomainError::Validation(_))
            ));
        }
        assert_eq!(repo.list().await.len(), 1);
        assert_eq!(blob.write_count(), 1);
    }

    #[tokio::test]
    async fn test_update_preserves_attendees_and_comments() {
        let (repo, _) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        repo.add_attendee(&e.id, "a@x.com").await.unwrap();
        repo.add_comment(&e.id, "a@x.com", "hi").await.unwrap();
        let before = repo.get(&e.id).await.unwrap();

        let after = repo
            .update(&e.id, &EventDraft::new("Meetup v2", "now with pizza", "2024-01-02"))
            .await
            .unwrap();

        assert_eq!(after.title, "Meetup v2");
        assert_eq!(after.description, "now with pizza");
        assert_eq!(after.date, "2024-01-02");
        assert_eq!(after.attendees, before.attendees);
        assert_eq!(after.comments, before.comments);
        assert_eq!(repo.get(&e.id).await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (repo, _) = repo();
        repo.create(&meetup()).await.unwrap();
        let before = repo.list().await;

        let err = repo
            .update(&EventId::from("missing"), &meetup())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref id) if id.as_str() == "missing"));
        assert_eq!(repo.list().await, before);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_draft() {
        let (repo, _) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        assert!(matches!(
            repo.update(&e.id, &EventDraft::new("x", "", "")).await,
            Err(DomainError::Validation(_))
        ));
        assert_eq!(repo.get(&e.id).await.unwrap(), e);
    }

    #[tokio::test]
    async fn test_repeat_rsvp_appends_each_time() {
        let (repo, _) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        for _ in 0..3 {
            repo.add_attendee(&e.id, "a@x.com").await.unwrap();
        }
        let e = repo.get(&e.id).await.unwrap();
        assert_eq!(e.attendees, vec!["a@x.com"; 3]);
    }

    #[tokio::test]
    async fn test_comment_scenario() {
        let (repo, _) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        assert_eq!(repo.list().await.len(), 1);

        let e = repo.add_comment(&e.id, "a@x.com", "hi").await.unwrap();
        assert_eq!(
            e.comments,
            vec![Comment {
                user: "a@x.com".into(),
                text: "hi".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_and_blank_comments_are_appended() {
        let (repo, _) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        repo.add_comment(&e.id, "a@x.com", "").await.unwrap();
        let e = repo.add_comment(&e.id, "a@x.com", " ").await.unwrap();

        let texts: Vec<&str> = e.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["", " "]);
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back_memory() {
        let (repo, blob) = repo();
        let e = repo.create(&meetup()).await.unwrap();
        blob.fail_writes(true);

        assert!(matches!(
            repo.create(&EventDraft::new("Other", "", "2024-02-02")).await,
            Err(DomainError::Persistence(_))
        ));
        assert!(repo.add_attendee(&e.id, "a@x.com").await.is_err());
        assert!(repo.add_comment(&e.id, "a@x.com", "hi").await.is_err());
        assert!(repo.update(&e.id, &EventDraft::new("X", "", "2025-01-01")).await.is_err());

        assert_eq!(repo.list().await, vec![e.clone()]);

        // Memory and storage agree after reload.
        blob.fail_writes(false);
        let reloaded = EventRepository::new(PersistentStore::new(blob));
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.list().await, vec![e]);
    }

    #[tokio::test]
    async fn test_reload_restores_full_records() {
        let (repo, blob) = repo();
        let a = repo.create(&meetup()).await.unwrap();
        repo.create(&EventDraft::new("Picnic", "bring food", "2024-06-01"))
            .await
            .unwrap();
        repo.add_attendee(&a.id, "a@x.com").await.unwrap();
        repo.add_comment(&a.id, "b@x.com", "see you").await.unwrap();

        let reloaded = EventRepository::new(PersistentStore::new(blob));
        assert_eq!(reloaded.load().await.unwrap(), 2);
        assert_eq!(reloaded.list().await, repo.list().await);
    }

    #[tokio::test]
    async fn test_concurrent_rsvps_are_serialized() {
        let (repo, blob) = repo();
        let repo = Arc::new(repo);
        let e = repo.create(&meetup()).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            let id = e.id.clone();
            handles.push(tokio::spawn(async move {
                repo.add_attendee(&id, &format!("u{i}@x.com")).await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }

        assert_eq!(repo.get(&e.id).await.unwrap().attendees.len(), 16);
        let reloaded = EventRepository::new(PersistentStore::new(blob));
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.get(&e.id).await.unwrap().attendees.len(), 16);
    }
}
