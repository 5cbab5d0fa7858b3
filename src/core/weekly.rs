use chrono::Duration;
use serde::Serialize;

use crate::models::HealthDocument;
use crate::models::document::DateKey;

/// Number of days in the overview window.
pub const WINDOW_DAYS: i64 = 7;

/// One day of the rolling overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: DateKey,
    pub label: String,
    pub water: u32,
    pub sleep: f64,
    pub steps: u64,
    pub mood: Option<String>,
}

/// The seven days ending at `today`, oldest first.
///
/// Each field comes from the live record when its date matches, otherwise
/// from the archived snapshot for that day, otherwise zero / absent.
pub fn weekly_view(doc: &HealthDocument, today: DateKey) -> Vec<DaySummary> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| summarize(doc, today - Duration::days(offset)))
        .collect()
}

fn summarize(doc: &HealthDocument, date: DateKey) -> DaySummary {
    let snapshot = doc.weekly.get(&date);

    let water = if doc.water.date == date {
        doc.water.glasses
    } else {
        snapshot.map(|s| s.water).unwrap_or(0)
    };
    let sleep = if doc.sleep.date == date {
        doc.sleep.hours
    } else {
        snapshot.map(|s| s.sleep).unwrap_or(0.0)
    };
    let steps = if doc.steps.date == date {
        doc.steps.steps
    } else {
        snapshot.map(|s| s.steps).unwrap_or(0)
    };
    let mood = if doc.mood.date == date {
        doc.mood.mood.clone()
    } else {
        snapshot.and_then(|s| s.mood.clone())
    };

    DaySummary {
        date,
        label: date.format("%a").to_string(),
        water,
        sleep,
        steps,
        mood,
    }
}
