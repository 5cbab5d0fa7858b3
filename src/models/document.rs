use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Calendar day used as the rollover and history index (`YYYY-MM-DD`).
pub type DateKey = NaiveDate;

/// The single persisted document. Every command loads it, patches one
/// field group and writes the whole thing back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDocument {
    pub bmi: Option<BmiRecord>,
    pub water: WaterRecord,
    pub sleep: SleepRecord,
    pub steps: StepsRecord,
    pub mood: MoodRecord,
    pub logs: BTreeMap<DateKey, Vec<String>>,
    pub weekly: BTreeMap<DateKey, DaySnapshot>,
    pub theme: Theme,
    pub reminders: Vec<Reminder>,
}

impl HealthDocument {
    /// Fresh document with every daily record stamped `today`.
    pub fn new(today: DateKey) -> Self {
        Self {
            bmi: None,
            water: WaterRecord::empty(today),
            sleep: SleepRecord::empty(today),
            steps: StepsRecord::empty(today),
            mood: MoodRecord::empty(today),
            logs: BTreeMap::new(),
            weekly: BTreeMap::new(),
            theme: Theme::Light,
            reminders: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    pub date: DateKey,
    pub glasses: u32,
}

impl WaterRecord {
    pub fn empty(date: DateKey) -> Self {
        Self { date, glasses: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: DateKey,
    pub hours: f64,
}

impl SleepRecord {
    pub fn empty(date: DateKey) -> Self {
        Self { date, hours: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsRecord {
    pub date: DateKey,
    pub steps: u64,
}

impl StepsRecord {
    pub fn empty(date: DateKey) -> Self {
        Self { date, steps: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: DateKey,
    pub mood: Option<String>,
}

impl MoodRecord {
    pub fn empty(date: DateKey) -> Self {
        Self { date, mood: None }
    }
}

/// Archived aggregate for one past (or current) day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    #[serde(default)]
    pub water: u32,
    #[serde(default)]
    pub sleep: f64,
    #[serde(default)]
    pub steps: u64,
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_value(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => Self::Underweight,
            b if b < 25.0 => Self::Normal,
            b if b < 30.0 => Self::Overweight,
            _ => Self::Obese,
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub value: f64,
    pub category: BmiCategory,
    #[serde(rename = "at")]
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(text: String, at: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            at,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_uses_original_field_names() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let doc = HealthDocument::new(today);
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["water"]["glasses"], 0);
        assert_eq!(v["sleep"]["hours"], 0.0);
        assert_eq!(v["steps"]["steps"], 0);
        assert!(v["mood"]["mood"].is_null());
        assert_eq!(v["water"]["date"], "2024-01-01");
        assert_eq!(v["theme"], "light");
        assert!(v["bmi"].is_null());
    }

    #[test]
    fn snapshot_fields_default_when_missing() {
        let snap: DaySnapshot = serde_json::from_str(r#"{"water": 4}"#).unwrap();
        assert_eq!(snap.water, 4);
        assert_eq!(snap.steps, 0);
        assert!(snap.mood.is_none());
    }

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
