//! Implements InputPort. Inquire-based interactive prompts, one menu per view.
//!
//! The adapter owns no business data: it renders `View` values from `EventApp`
//! and forwards the chosen action. Esc on Auth/Home quits; on inner screens it goes back.

use crate::domain::{DomainError, DraftField, Event, EventDraft, EventId, Statistics};
use crate::ports::InputPort;
use crate::usecases::{EventApp, View};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::InquireError;
use inquire::ui::{Color as UiColor, RenderConfig, Styled};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::io::stdout;
use std::sync::Arc;

/// Widest stats bar, in characters.
const MAX_BAR: usize = 30;

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(UiColor::LightMagenta))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(UiColor::LightBlue));
    inquire::set_global_render_config(config);
}

enum Flow {
    Continue,
    Quit,
}

/// Cancelled prompts become `None`; other prompt failures are UI errors.
fn ask<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn colored_line(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
}

fn report(e: &DomainError) {
    colored_line(Color::Red, &format!("Error: {}", e));
}

fn success(text: &str) {
    colored_line(Color::Green, text);
}

fn heading(text: &str) {
    colored_line(Color::Cyan, &format!("\n== {} ==", text));
}

#[derive(Clone)]
enum HomeChoice {
    Open { id: EventId, label: String },
    Create,
    Stats,
    Quit,
}

impl fmt::Display for HomeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeChoice::Open { label, .. } => f.write_str(label),
            HomeChoice::Create => f.write_str("+ Create new event"),
            HomeChoice::Stats => f.write_str("View statistics"),
            HomeChoice::Quit => f.write_str("Quit"),
        }
    }
}

/// Bar proportional to `value / max`, at least one block for non-zero values.
fn bar(value: usize, max: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let width = (value * MAX_BAR).div_ceil(max).max(1);
    "█".repeat(width)
}

fn stats_lines(stats: &Statistics) -> Vec<String> {
    if stats.is_empty() {
        return vec!["No events yet.".to_string()];
    }
    let max_a = stats.attendee_counts.iter().copied().max().unwrap_or(0);
    let max_c = stats.comment_counts.iter().copied().max().unwrap_or(0);
    let mut lines = vec!["Attendees per event".to_string()];
    for (title, attendees, _) in stats.rows() {
        lines.push(format!("  {:<24} {:>4} {}", title, attendees, bar(attendees, max_a)));
    }
    lines.push("Comments per event".to_string());
    for (title, _, comments) in stats.rows() {
        lines.push(format!("  {:<24} {:>4} {}", title, comments, bar(comments, max_c)));
    }
    lines
}

fn print_event(event: &Event) {
    heading(&event.title);
    println!("{}", event.description);
    println!("Date: {}", event.date);
    println!("Attendees ({}):", event.attendees.len());
    for a in &event.attendees {
        println!("  - {}", a);
    }
    println!("Comments ({}):", event.comments.len());
    for c in &event.comments {
        println!("  {}: {}", c.user, c.text);
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    app: Arc<EventApp>,
}

impl TuiInputPort {
    pub fn new(app: Arc<EventApp>) -> Self {
        Self { app }
    }

    async fn auth_screen(&self) -> Result<Flow, DomainError> {
        heading("Log in or register");
        let Some(choice) = ask(Select::new("Action", vec!["Log in", "Register", "Quit"]).prompt())?
        else {
            return Ok(Flow::Quit);
        };
        if choice == "Quit" {
            return Ok(Flow::Quit);
        }
        let Some(email) = ask(Text::new("Email:").prompt())? else {
            return Ok(Flow::Continue);
        };
        let Some(password) = ask(
            Password::new("Password:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt(),
        )?
        else {
            return Ok(Flow::Continue);
        };
        if choice == "Register" {
            self.app.register(&email, &password).await?;
            success("Account registered. You can now log in.");
        } else {
            let user = self.app.login(&email, &password).await?;
            success(&format!("Welcome, {}", user.email));
        }
        Ok(Flow::Continue)
    }

    async fn home_screen(&self, events: Vec<Event>, draft: EventDraft) -> Result<Flow, DomainError> {
        heading("Events");
        let mut options: Vec<HomeChoice> = events
            .into_iter()
            .map(|e| HomeChoice::Open {
                label: format!("{} ({})", e.title, e.date),
                id: e.id,
            })
            .collect();
        options.extend([HomeChoice::Create, HomeChoice::Stats, HomeChoice::Quit]);

        let Some(choice) = ask(Select::new("Choose", options).prompt())? else {
            return Ok(Flow::Quit);
        };
        match choice {
            HomeChoice::Open { id, .. } => {
                self.app.select_event(&id).await?;
            }
            HomeChoice::Create => {
                if self.edit_draft_fields(&draft).await? {
                    let event = self.app.create_event().await?;
                    success(&format!("Created \"{}\"", event.title));
                }
            }
            HomeChoice::Stats => {
                self.app.view_stats().await?;
            }
            HomeChoice::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Prompts for each draft field, prefilled. Returns `false` if the user cancelled.
    async fn edit_draft_fields(&self, draft: &EventDraft) -> Result<bool, DomainError> {
        let fields = [
            (DraftField::Title, "Title:", draft.title.as_str()),
            (DraftField::Description, "Description:", draft.description.as_str()),
            (DraftField::Date, "Date (YYYY-MM-DD):", draft.date.as_str()),
        ];
        for (field, label, initial) in fields {
            let Some(value) = ask(Text::new(label).with_initial_value(initial).prompt())? else {
                return Ok(false);
            };
            self.app.edit_draft(field, value).await;
        }
        Ok(true)
    }

    async fn details_screen(&self, event: Event) -> Result<Flow, DomainError> {
        print_event(&event);
        let actions = vec!["RSVP", "Add comment", "Share", "Update event", "Back"];
        let choice = ask(Select::new("Action", actions).prompt())?.unwrap_or("Back");
        match choice {
            "RSVP" => {
                self.app.rsvp().await?;
                success("Attendance confirmed.");
            }
            "Add comment" => {
                if let Some(text) = ask(Text::new("Comment:").prompt())? {
                    self.app.add_comment(&text).await?;
                    success("Comment added.");
                }
            }
            "Share" => {
                self.app.share_selected().await?;
            }
            "Update event" => {
                self.app.request_update().await?;
            }
            _ => self.app.back().await?,
        }
        Ok(Flow::Continue)
    }

    async fn update_screen(&self, event: Event, draft: EventDraft) -> Result<Flow, DomainError> {
        heading(&format!("Update \"{}\"", event.title));
        if !self.edit_draft_fields(&draft).await? {
            self.app.back().await?;
            return Ok(Flow::Continue);
        }
        let save = ask(Select::new("Save changes?", vec!["Save", "Discard"]).prompt())?;
        if save == Some("Save") {
            let event = self.app.submit_update().await?;
            success(&format!("Updated \"{}\"", event.title));
        } else {
            self.app.back().await?;
        }
        Ok(Flow::Continue)
    }

    async fn stats_screen(&self, stats: Statistics) -> Result<Flow, DomainError> {
        heading("Participation statistics");
        for line in stats_lines(&stats) {
            println!("{}", line);
        }
        ask(Select::new("", vec!["Back"]).prompt())?;
        self.app.back().await?;
        Ok(Flow::Continue)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let step = match self.app.view().await? {
                View::Auth => self.auth_screen().await,
                View::Home { events, draft } => self.home_screen(events, draft).await,
                View::EventDetails { event } => self.details_screen(event).await,
                View::UpdateEvent { event, draft } => self.update_screen(event, draft).await,
                View::Stats { stats } => self.stats_screen(stats).await,
            };
            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e @ DomainError::Ui(_)) => return Err(e),
                Err(e) => report(&e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(10, 10).chars().count(), MAX_BAR);
        assert_eq!(bar(1, 1000).chars().count(), 1);
    }

    #[test]
    fn test_stats_lines_empty() {
        assert_eq!(stats_lines(&Statistics::default()), vec!["No events yet."]);
    }

    #[test]
    fn test_stats_lines_one_row_per_event_per_chart() {
        let stats = Statistics {
            titles: vec!["A".into(), "B".into()],
            attendee_counts: vec![3, 0],
            comment_counts: vec![1, 2],
        };
        let lines = stats_lines(&stats);
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains('A') && lines[1].ends_with(&"█".repeat(MAX_BAR)));
        assert!(lines[2].trim_end().ends_with('0'));
    }
}
