use anyhow::Result;
use serde_json::json;

use healthplanner::models::document::Theme;

use super::{Ctx, Session, emit};
use crate::cli::ThemeArg;

pub fn run(ctx: &Ctx, mode: ThemeArg) -> Result<()> {
    let session = Session::open(ctx)?;
    let mut doc = session.load();
    let before = doc.theme;
    doc.theme = match mode {
        ThemeArg::Show => before,
        ThemeArg::Toggle => before.toggled(),
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
    };
    if mode != ThemeArg::Show {
        session.save(&doc);
    }

    let theme = doc.theme;
    emit("theme", ctx.human, json!({ "theme": theme }), || {
        format!("Theme: {}", theme)
    })
}
