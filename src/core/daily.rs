use tracing::debug;

use crate::core::validate::Mood;
use crate::models::HealthDocument;
use crate::models::document::{
    DateKey, DaySnapshot, MoodRecord, SleepRecord, StepsRecord, WaterRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterDelta {
    Add,
    Remove,
}

/// A pre-validated value for one of today's metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Water(WaterDelta),
    Sleep(f64),
    Steps(u64),
    Mood(Mood),
}

/// Roll every stale daily record over to `today`.
///
/// A record whose date is not `today` first has its value archived into
/// `weekly[record.date]` (zero values are not archived), then is replaced by
/// a record for `today` seeded from `weekly[today]`, or empty when today has
/// no snapshot yet.
/// Calling this again on the same day changes nothing.
pub fn ensure_today(doc: &mut HealthDocument, today: DateKey) {
    let carried = doc.weekly.get(&today).cloned().unwrap_or_default();
    if doc.water.date != today {
        let fresh = WaterRecord {
            date: today,
            glasses: carried.water,
        };
        let stale = std::mem::replace(&mut doc.water, fresh);
        debug!(date = %stale.date, "water rolled over");
        if stale.glasses > 0 {
            snapshot_mut(doc, stale.date).water = stale.glasses;
        }
    }
    if doc.sleep.date != today {
        let fresh = SleepRecord {
            date: today,
            hours: carried.sleep,
        };
        let stale = std::mem::replace(&mut doc.sleep, fresh);
        debug!(date = %stale.date, "sleep rolled over");
        if stale.hours > 0.0 {
            snapshot_mut(doc, stale.date).sleep = stale.hours;
        }
    }
    if doc.steps.date != today {
        let fresh = StepsRecord {
            date: today,
            steps: carried.steps,
        };
        let stale = std::mem::replace(&mut doc.steps, fresh);
        debug!(date = %stale.date, "steps rolled over");
        if stale.steps > 0 {
            snapshot_mut(doc, stale.date).steps = stale.steps;
        }
    }
    if doc.mood.date != today {
        let fresh = MoodRecord {
            date: today,
            mood: carried.mood,
        };
        let stale = std::mem::replace(&mut doc.mood, fresh);
        debug!(date = %stale.date, "mood rolled over");
        if stale.mood.is_some() {
            snapshot_mut(doc, stale.date).mood = stale.mood;
        }
    }
}

/// Set today's value for one metric and mirror it into today's snapshot.
///
/// Water applies a +1/-1 delta floored at zero; the other metrics are
/// overwritten, so repeating the same call is harmless.
pub fn record_metric(doc: &mut HealthDocument, today: DateKey, value: MetricValue) {
    ensure_today(doc, today);
    match value {
        MetricValue::Water(delta) => {
            doc.water.glasses = match delta {
                WaterDelta::Add => doc.water.glasses.saturating_add(1),
                WaterDelta::Remove => doc.water.glasses.saturating_sub(1),
            };
            let glasses = doc.water.glasses;
            snapshot_mut(doc, today).water = glasses;
        }
        MetricValue::Sleep(hours) => {
            doc.sleep = SleepRecord { date: today, hours };
            snapshot_mut(doc, today).sleep = hours;
        }
        MetricValue::Steps(steps) => {
            doc.steps = StepsRecord { date: today, steps };
            snapshot_mut(doc, today).steps = steps;
        }
        MetricValue::Mood(mood) => {
            let label = Some(mood.label().to_string());
            doc.mood = MoodRecord {
                date: today,
                mood: label.clone(),
            };
            snapshot_mut(doc, today).mood = label;
        }
    }
}

/// Push a trimmed entry to the front of today's log. Blank text is ignored
/// and reported as `false`.
pub fn append_log(doc: &mut HealthDocument, today: DateKey, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    doc.logs.entry(today).or_default().insert(0, text.to_string());
    true
}

/// Empty today's log list; other days are left alone.
pub fn clear_today_logs(doc: &mut HealthDocument, today: DateKey) {
    doc.logs.insert(today, Vec::new());
}

pub fn today_logs(doc: &HealthDocument, today: DateKey) -> &[String] {
    doc.logs.get(&today).map(Vec::as_slice).unwrap_or(&[])
}

fn snapshot_mut(doc: &mut HealthDocument, date: DateKey) -> &mut DaySnapshot {
    doc.weekly.entry(date).or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn ensure_today_stamps_every_record() {
        let mut doc = HealthDocument::new(day(1));
        ensure_today(&mut doc, day(5));
        assert_eq!(doc.water.date, day(5));
        assert_eq!(doc.sleep.date, day(5));
        assert_eq!(doc.steps.date, day(5));
        assert_eq!(doc.mood.date, day(5));
    }

    #[test]
    fn ensure_today_is_idempotent() {
        let mut doc = HealthDocument::new(day(1));
        record_metric(&mut doc, day(1), MetricValue::Steps(300));
        ensure_today(&mut doc, day(1));
        let once = doc.clone();
        ensure_today(&mut doc, day(1));
        assert_eq!(doc, once);
        assert_eq!(doc.steps.steps, 300);
    }

    #[test]
    fn rollover_archives_before_reset() {
        let mut doc = HealthDocument::new(day(1));
        doc.water.glasses = 6;
        doc.sleep.hours = 7.0;
        ensure_today(&mut doc, day(2));
        assert_eq!(doc.water.glasses, 0);
        assert_eq!(doc.sleep.hours, 0.0);
        let snap = &doc.weekly[&day(1)];
        assert_eq!(snap.water, 6);
        assert_eq!(snap.sleep, 7.0);
    }

    #[test]
    fn rollover_keeps_existing_snapshot_mood() {
        let mut doc = HealthDocument::new(day(1));
        doc.weekly.insert(
            day(1),
            DaySnapshot {
                mood: Some("Calm".into()),
                ..DaySnapshot::default()
            },
        );
        ensure_today(&mut doc, day(2));
        assert_eq!(doc.weekly[&day(1)].mood.as_deref(), Some("Calm"));
    }

    #[test]
    fn rollover_resumes_from_todays_snapshot() {
        let mut doc = HealthDocument::new(day(4));
        doc.weekly.insert(
            day(5),
            DaySnapshot {
                water: 3,
                steps: 9000,
                ..DaySnapshot::default()
            },
        );
        doc.water.glasses = 1;
        ensure_today(&mut doc, day(5));
        assert_eq!(doc.water.glasses, 3);
        assert_eq!(doc.steps.steps, 9000);
        assert_eq!(doc.sleep.hours, 0.0);
        assert!(doc.mood.mood.is_none());
        assert_eq!(doc.weekly[&day(4)].water, 1);
    }

    #[test]
    fn water_is_floored_at_zero() {
        let mut doc = HealthDocument::new(day(1));
        record_metric(&mut doc, day(1), MetricValue::Water(WaterDelta::Remove));
        assert_eq!(doc.water.glasses, 0);
        for _ in 0..3 {
            record_metric(&mut doc, day(1), MetricValue::Water(WaterDelta::Add));
        }
        record_metric(&mut doc, day(1), MetricValue::Water(WaterDelta::Remove));
        assert_eq!(doc.water.glasses, 2);
        assert_eq!(doc.weekly[&day(1)].water, 2);
    }

    #[test]
    fn steps_are_overwritten_not_summed() {
        let mut doc = HealthDocument::new(day(1));
        record_metric(&mut doc, day(1), MetricValue::Steps(5000));
        record_metric(&mut doc, day(1), MetricValue::Steps(5000));
        assert_eq!(doc.steps.steps, 5000);
    }

    #[test]
    fn mood_resets_on_the_next_day() {
        let mut doc = HealthDocument::new(day(1));
        record_metric(&mut doc, day(1), MetricValue::Mood(Mood::Happy));
        assert_eq!(doc.mood.mood.as_deref(), Some("Happy"));
        ensure_today(&mut doc, day(2));
        assert_eq!(doc.mood.date, day(2));
        assert!(doc.mood.mood.is_none());
    }

    #[test]
    fn logs_are_newest_first_and_skip_blanks() {
        let mut doc = HealthDocument::new(day(1));
        assert!(!append_log(&mut doc, day(1), "  "));
        assert!(today_logs(&doc, day(1)).is_empty());
        assert!(append_log(&mut doc, day(1), "felt great"));
        assert!(append_log(&mut doc, day(1), " slept early "));
        assert_eq!(today_logs(&doc, day(1)), ["slept early", "felt great"]);
    }

    #[test]
    fn clearing_today_leaves_other_days() {
        let mut doc = HealthDocument::new(day(2));
        append_log(&mut doc, day(1), "yesterday");
        append_log(&mut doc, day(2), "today");
        clear_today_logs(&mut doc, day(2));
        assert!(today_logs(&doc, day(2)).is_empty());
        assert_eq!(today_logs(&doc, day(1)), ["yesterday"]);
    }
}
