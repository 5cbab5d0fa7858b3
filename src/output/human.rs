use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::core::status::TodayView;
use crate::core::weekly::DaySummary;
use crate::models::document::{BmiCategory, BmiRecord, Reminder};
use crate::models::meal::Meal;

const NO_MOOD: &str = "—";

/// Text progress bar for the water goal, e.g. `[#####-----] 50%`.
pub fn progress_bar(pct: u32) -> String {
    let filled = (pct.min(100) / 10) as usize;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(10 - filled), pct)
}

pub fn format_bmi(b: &BmiRecord) -> String {
    let category = match b.category {
        BmiCategory::Normal => b.category.to_string().green(),
        BmiCategory::Overweight | BmiCategory::Underweight => b.category.to_string().yellow(),
        BmiCategory::Obese => b.category.to_string().red(),
    };
    format!("BMI: {} — {}", b.value, category)
}

/// Pretty-print today's quick stats.
pub fn format_today(v: &TodayView) -> String {
    let mut out = format!("=== Health Planner — {} ===\n\n", v.date);
    out.push_str(&format!(
        "Water: {}/{} glasses {}\n",
        v.water,
        v.water_goal,
        progress_bar(v.water_progress_pct)
    ));
    out.push_str(&format!("Sleep: {} h\n", v.sleep));
    out.push_str(&format!("Steps: {}\n", v.steps));
    out.push_str(&format!("Mood:  {}\n", v.mood.as_deref().unwrap_or(NO_MOOD)));
    if let Some(ref b) = v.bmi {
        out.push_str(&format!("Saved {}\n", format_bmi(b)));
    }
    out.push('\n');
    out.push_str(&format_logs(&v.logs));
    out
}

pub fn format_logs(logs: &[String]) -> String {
    if logs.is_empty() {
        return "No log entries today.".to_string();
    }
    let mut out = String::from("Today's log:");
    for entry in logs {
        out.push_str(&format!("\n  - {}", entry));
    }
    out
}

/// Seven-day overview as a table.
pub fn format_week(days: &[DaySummary]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Day", "Date", "Water", "Sleep", "Steps", "Mood"]);
    for d in days {
        table.add_row(vec![
            Cell::new(&d.label),
            Cell::new(d.date),
            Cell::new(d.water),
            Cell::new(d.sleep),
            Cell::new(d.steps),
            Cell::new(d.mood.as_deref().unwrap_or(NO_MOOD)),
        ]);
    }
    table.to_string()
}

pub fn format_reminders(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return "No reminders.".to_string();
    }
    reminders
        .iter()
        .map(|r| {
            let id = &r.id[..8.min(r.id.len())];
            match r.at {
                Some(ref at) => format!("{}  {}  {}", id.dimmed(), at, r.text),
                None => format!("{}  --:--  {}", id.dimmed(), r.text),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Meal name, origin and ingredient list.
pub fn format_meal(meal: &Meal) -> String {
    let mut out = meal.name.bold().to_string();
    let origin: Vec<&str> = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        out.push_str(&format!(" ({})", origin.join(", ")));
    }
    let items = meal.ingredients();
    if items.is_empty() {
        out.push_str("\n  No ingredients");
    }
    for it in items {
        if it.measure.is_empty() {
            out.push_str(&format!("\n  - {}", it.ingredient));
        } else {
            out.push_str(&format!("\n  - {} — {}", it.ingredient, it.measure));
        }
    }
    if let Some(link) = meal.youtube.as_ref().filter(|l| !l.is_empty()) {
        out.push_str(&format!("\n  Video: {}", link));
    }
    out
}
