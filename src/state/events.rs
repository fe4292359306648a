use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use uuid::Uuid;

/// Operation log file name.
pub const EVENTS_FILE: &str = "storedesk.log";

/// Types of operations that are logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A list fetch failed.
    FetchFailed,
    /// An entity's status was changed.
    StatusChanged,
    /// An entity was deleted.
    EntityDeleted,
    /// A payment was refunded.
    RefundIssued,
    /// A field edit (price, quantity) was applied.
    FieldUpdated,
    /// A user account was activated or deactivated.
    ActiveToggled,
    /// A mutation was rejected by the backend.
    MutationFailed,
}

/// A single entry in the operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the operation happened.
    pub timestamp: DateTime<Utc>,
    /// Type of operation.
    pub event_type: EventType,
    /// Resource path involved, e.g. `orders/o-17`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Additional details about the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Correlation id of the originating request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
}

impl Event {
    /// Create a new event with the current timestamp.
    pub fn new(event_type: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event_type,
            subject: None,
            details: None,
            request_id: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_request(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }
}

/// Append-only operation log.
///
/// Writes are best-effort: a failed write never interrupts the UI.
pub struct EventLog {
    log_path: std::path::PathBuf,
}

impl EventLog {
    /// Create a new operation log inside the given directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            log_path: dir.as_ref().join(EVENTS_FILE),
        }
    }

    /// Append an event to the log file.
    ///
    /// Creates the file (and its directory) if needed.
    pub fn log(&self, event: Event) -> std::io::Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let mut writer = BufWriter::new(file);

        // Format: timestamp | event_type | subject | details
        let subject = event.subject.as_deref().unwrap_or("-");
        let details = event.details.as_deref().unwrap_or("-");
        let event_str = format!("{:?}", event.event_type).to_lowercase();
        let request = event
            .request_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            writer,
            "{} | {} | {} | {} | {}",
            event.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            event_str,
            subject,
            details,
            request
        )?;

        writer.flush()
    }

    /// Log a failed list fetch.
    pub fn log_fetch_failed(&self, resource: &str, error: &str, request_id: Uuid) {
        let event = Event::new(EventType::FetchFailed)
            .with_subject(resource)
            .with_details(error)
            .with_request(request_id);
        let _ = self.log(event);
    }

    /// Log a status change.
    pub fn log_status_changed(&self, subject: &str, status: &str) {
        let event = Event::new(EventType::StatusChanged)
            .with_subject(subject)
            .with_details(status);
        let _ = self.log(event);
    }

    /// Log an entity deletion.
    pub fn log_entity_deleted(&self, subject: &str) {
        let event = Event::new(EventType::EntityDeleted).with_subject(subject);
        let _ = self.log(event);
    }

    /// Log a refund.
    pub fn log_refund_issued(&self, subject: &str) {
        let event = Event::new(EventType::RefundIssued).with_subject(subject);
        let _ = self.log(event);
    }

    /// Log a field edit.
    pub fn log_field_updated(&self, subject: &str, details: &str) {
        let event = Event::new(EventType::FieldUpdated)
            .with_subject(subject)
            .with_details(details);
        let _ = self.log(event);
    }

    /// Log a user activation toggle.
    pub fn log_active_toggled(&self, subject: &str, active: bool) {
        let event = Event::new(EventType::ActiveToggled)
            .with_subject(subject)
            .with_details(if active { "activated" } else { "deactivated" });
        let _ = self.log(event);
    }

    /// Log a rejected mutation.
    pub fn log_mutation_failed(&self, subject: &str, error: &str) {
        let event = Event::new(EventType::MutationFailed)
            .with_subject(subject)
            .with_details(error);
        let _ = self.log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = EventLog::new(temp_dir.path());

        log.log_status_changed("orders/o-1", "shipped");
        log.log_entity_deleted("users/u-2");

        let contents = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("statuschanged"));
        assert!(lines[0].contains("orders/o-1"));
        assert!(lines[0].contains("shipped"));
        assert!(lines[1].contains("entitydeleted"));
    }

    #[test]
    fn test_log_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let log = EventLog::new(&nested);

        log.log_refund_issued("payments/pay-1");

        assert!(nested.join(EVENTS_FILE).exists());
    }
}
