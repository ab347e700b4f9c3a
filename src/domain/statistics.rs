//! Attendance/comment statistics derived from the event list.

use crate::domain::Event;

/// Three aligned series, one entry per event in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub titles: Vec<String>,
    pub attendee_counts: Vec<usize>,
    pub comment_counts: Vec<usize>,
}

impl Statistics {
    /// Pure; recomputed on every request. An empty list yields three empty series.
    pub fn compute(events: &[Event]) -> Self {
        let mut stats = Self {
            titles: Vec::with_capacity(events.len()),
            attendee_counts: Vec::with_capacity(events.len()),
            comment_counts: Vec::with_capacity(events.len()),
        };
        for event in events {
            stats.titles.push(event.title.clone());
            stats.attendee_counts.push(event.attendees.len());
            stats.comment_counts.push(event.comments.len());
        }
        stats
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Rows of (title, attendees, comments) for tabular rendering.
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize, usize)> + '_ {
        self.titles
            .iter()
            .zip(&self.attendee_counts)
            .zip(&self.comment_counts)
            .map(|((t, a), c)| (t.as_str(), *a, *c))
    }
}
