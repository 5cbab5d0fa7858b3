use anyhow::Result;
use serde_json::json;

use healthplanner::core::daily::{append_log, clear_today_logs, today_logs};
use healthplanner::output::human;

use super::{Ctx, Session, emit};

pub fn run_add(ctx: &Ctx, text: &str) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let today = session.today();
    let added = append_log(&mut doc, today, text);
    if added {
        session.save(&doc);
    }
    let entries = today_logs(&doc, today);

    emit(
        "log",
        ctx.human,
        json!({ "added": added, "date": today, "entries": entries }),
        || {
            if added {
                format!("Logged.\n{}", human::format_logs(entries))
            } else {
                "Nothing to log.".to_string()
            }
        },
    )
}

pub fn run_show(ctx: &Ctx) -> Result<()> {
    let session = Session::open(ctx)?;
    let doc = session.load();
    let today = session.today();
    let entries = today_logs(&doc, today);

    emit(
        "log",
        ctx.human,
        json!({ "date": today, "entries": entries }),
        || human::format_logs(entries),
    )
}

pub fn run_clear(ctx: &Ctx) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let today = session.today();
    clear_today_logs(&mut doc, today);
    session.save(&doc);

    emit(
        "log",
        ctx.human,
        json!({ "date": today, "entries": [] }),
        || format!("Cleared log for {}.", today),
    )
}
