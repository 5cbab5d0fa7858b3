use anyhow::Result;
use serde_json::json;

use healthplanner::core::daily::{MetricValue, WaterDelta, record_metric};
use healthplanner::core::status::water_progress;
use healthplanner::core::{bmi, validate};
use healthplanner::output::human;

use super::{Ctx, Session, emit};
use crate::cli::WaterAction;

pub fn run_water(ctx: &Ctx, action: WaterAction) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let delta = match action {
        WaterAction::Add => WaterDelta::Add,
        WaterAction::Remove => WaterDelta::Remove,
    };
    record_metric(&mut doc, session.today(), MetricValue::Water(delta));
    session.save(&doc);

    let goal = session.config.water_goal;
    let pct = water_progress(doc.water.glasses, goal);
    emit(
        "water",
        ctx.human,
        json!({ "water": doc.water, "goal": goal, "progress_pct": pct }),
        || {
            format!(
                "Water: {}/{} glasses {}",
                doc.water.glasses,
                goal,
                human::progress_bar(pct)
            )
        },
    )
}

pub fn run_sleep(ctx: &Ctx, input: &str) -> Result<()> {
    let hours = validate::sleep_hours(input)?;
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    record_metric(&mut doc, session.today(), MetricValue::Sleep(hours));
    session.save(&doc);

    emit("sleep", ctx.human, json!({ "sleep": doc.sleep }), || {
        format!("Sleep saved: {} h", hours)
    })
}

pub fn run_steps(ctx: &Ctx, input: &str) -> Result<()> {
    let steps = validate::steps(input)?;
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    record_metric(&mut doc, session.today(), MetricValue::Steps(steps));
    session.save(&doc);

    emit("steps", ctx.human, json!({ "steps": doc.steps }), || {
        format!("Steps saved: {}", steps)
    })
}

pub fn run_mood(ctx: &Ctx, input: &str) -> Result<()> {
    let mood = validate::mood(input)?;
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    record_metric(&mut doc, session.today(), MetricValue::Mood(mood));
    session.save(&doc);

    emit("mood", ctx.human, json!({ "mood": doc.mood }), || {
        format!("Mood: {}", mood)
    })
}

pub fn run_bmi(ctx: &Ctx, kg: f64, cm: f64) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let record = bmi::record_bmi(&mut doc, kg, cm, session.now())?;
    session.save(&doc);

    emit("bmi", ctx.human, json!({ "bmi": record }), || {
        human::format_bmi(&record)
    })
}
