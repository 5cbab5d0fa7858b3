use serde::Serialize;

use crate::core::daily::today_logs;
use crate::models::HealthDocument;
use crate::models::document::{BmiRecord, DateKey};

/// Today's quick stats.
#[derive(Debug, Serialize)]
pub struct TodayView {
    pub date: DateKey,
    pub water: u32,
    pub water_goal: u32,
    pub water_progress_pct: u32,
    pub sleep: f64,
    pub steps: u64,
    pub mood: Option<String>,
    pub logs: Vec<String>,
    pub bmi: Option<BmiRecord>,
}

/// Build today's view. Records stamped for another day read as zero.
pub fn today_view(doc: &HealthDocument, today: DateKey, water_goal: u32) -> TodayView {
    let water = if doc.water.date == today {
        doc.water.glasses
    } else {
        0
    };
    let sleep = if doc.sleep.date == today {
        doc.sleep.hours
    } else {
        0.0
    };
    let steps = if doc.steps.date == today {
        doc.steps.steps
    } else {
        0
    };
    let mood = if doc.mood.date == today {
        doc.mood.mood.clone()
    } else {
        None
    };

    TodayView {
        date: today,
        water,
        water_goal,
        water_progress_pct: water_progress(water, water_goal),
        sleep,
        steps,
        mood,
        logs: today_logs(doc, today).to_vec(),
        bmi: doc.bmi.clone(),
    }
}

/// Percentage of the daily water goal, capped at 100.
pub fn water_progress(glasses: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 100;
    }
    let pct = (f64::from(glasses) / f64::from(goal) * 100.0).round() as u32;
    pct.min(100)
}
