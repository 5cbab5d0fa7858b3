use anyhow::Result;
use serde_json::json;
use std::io::{self, Write};

use healthplanner::error::HealthError;

use super::{Ctx, Session, emit};

pub fn run(ctx: &Ctx, yes: bool) -> Result<()> {
    if !yes && !confirm("Reset all saved data?")? {
        return emit("reset", ctx.human, json!({ "reset": false }), || {
            "Reset cancelled.".to_string()
        });
    }

    let session = Session::open(ctx)?;
    if !session.store.reset() {
        return Err(HealthError::StorageUnavailable("could not remove saved data".into()).into());
    }

    emit("reset", ctx.human, json!({ "reset": true }), || {
        "All saved data removed.".to_string()
    })
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(matches!(buf.trim(), "y" | "Y" | "yes"))
}
