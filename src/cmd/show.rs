use anyhow::Result;
use serde_json::json;

use healthplanner::core::status::today_view;
use healthplanner::core::weekly::weekly_view;
use healthplanner::output::human;

use super::{Ctx, Session, emit};

pub fn run_today(ctx: &Ctx) -> Result<()> {
    let session = Session::open(ctx)?;
    let doc = session.load();
    let view = today_view(&doc, session.today(), session.config.water_goal);

    emit("today", ctx.human, serde_json::to_value(&view)?, || {
        human::format_today(&view)
    })
}

pub fn run_week(ctx: &Ctx) -> Result<()> {
    let session = Session::open(ctx)?;
    let doc = session.load();
    let days = weekly_view(&doc, session.today());

    emit("week", ctx.human, json!({ "days": days }), || {
        human::format_week(&days)
    })
}
