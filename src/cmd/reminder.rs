use anyhow::Result;
use serde_json::json;

use healthplanner::core::reminders::{add_reminder, remove_reminder};
use healthplanner::output::human;

use super::{Ctx, Session, emit};

pub fn run_add(ctx: &Ctx, text: &str, at: Option<&str>) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let reminder = add_reminder(&mut doc, text, at, session.now())?;
    session.save(&doc);

    emit("reminder", ctx.human, json!({ "reminder": reminder }), || {
        format!("Added reminder: {}", human::format_reminders(std::slice::from_ref(&reminder)))
    })
}

pub fn run_list(ctx: &Ctx) -> Result<()> {
    let session = Session::open(ctx)?;
    let doc = session.load();

    emit(
        "reminder",
        ctx.human,
        json!({ "reminders": doc.reminders }),
        || human::format_reminders(&doc.reminders),
    )
}

pub fn run_remove(ctx: &Ctx, id: &str) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    if !remove_reminder(&mut doc, id) {
        anyhow::bail!("no unique reminder matches id '{}'", id);
    }
    session.save(&doc);

    emit("reminder", ctx.human, json!({ "removed": id }), || {
        format!("Removed reminder {}", id)
    })
}
