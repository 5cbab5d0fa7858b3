use chrono::{DateTime, Utc};

use crate::error::HealthError;
use crate::models::HealthDocument;
use crate::models::document::Reminder;

/// Add a reminder. `at` is validated as `HH:MM` when given.
pub fn add_reminder(
    doc: &mut HealthDocument,
    text: &str,
    at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Reminder, HealthError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(HealthError::validation("reminder text cannot be empty"));
    }
    let at = at.map(crate::core::validate::reminder_time).transpose()?;
    let reminder = Reminder::new(text.to_string(), at, now);
    doc.reminders.push(reminder.clone());
    Ok(reminder)
}

/// Remove a reminder by id (a unique prefix is enough). Returns whether one
/// was removed.
pub fn remove_reminder(doc: &mut HealthDocument, id: &str) -> bool {
    let matches: Vec<usize> = doc
        .reminders
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id.starts_with(id))
        .map(|(i, _)| i)
        .collect();
    match matches.as_slice() {
        [only] => {
            doc.reminders.remove(*only);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc() -> HealthDocument {
        HealthDocument::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn add_and_remove() {
        let mut d = doc();
        let r = add_reminder(&mut d, " drink water ", Some("9:30"), Utc::now()).unwrap();
        assert_eq!(r.text, "drink water");
        assert_eq!(r.at.as_deref(), Some("09:30"));
        assert_eq!(d.reminders.len(), 1);
        assert!(!remove_reminder(&mut d, "nope"));
        assert!(remove_reminder(&mut d, &r.id[..8]));
        assert!(d.reminders.is_empty());
    }

    #[test]
    fn empty_prefix_is_ambiguous_with_two_reminders() {
        let mut d = doc();
        add_reminder(&mut d, "a", None, Utc::now()).unwrap();
        add_reminder(&mut d, "b", None, Utc::now()).unwrap();
        assert!(!remove_reminder(&mut d, ""));
        assert_eq!(d.reminders.len(), 2);
    }

    #[test]
    fn rejects_blank_text_and_bad_time() {
        let mut d = doc();
        assert!(add_reminder(&mut d, "  ", None, Utc::now()).is_err());
        assert!(add_reminder(&mut d, "walk", Some("noon"), Utc::now()).is_err());
        assert!(d.reminders.is_empty());
    }
}
