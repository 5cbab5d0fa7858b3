pub mod completions;
pub mod config;
pub mod init;
pub mod log;
pub mod recipes;
pub mod reminder;
pub mod reset;
pub mod show;
pub mod theme;
pub mod track;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use serde_json::Value;

use healthplanner::core::clock::{Clock, FixedClock, SystemClock};
use healthplanner::core::daily::ensure_today;
use healthplanner::core::store::StateStore;
use healthplanner::db::Database;
use healthplanner::models::HealthDocument;
use healthplanner::models::config::Config;
use healthplanner::output;

/// Global flags shared by every command.
pub struct Ctx {
    pub date: Option<NaiveDate>,
    pub human: bool,
}

/// Config, store and clock for one load/mutate/save cycle.
pub struct Session {
    pub config: Config,
    pub store: StateStore<Database>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn open(ctx: &Ctx) -> Result<Self> {
        let config = Config::load()?;
        let db = Database::open(&Config::db_path())?;
        let clock: Box<dyn Clock> = match ctx.date {
            Some(d) => Box::new(FixedClock::new(d)),
            None => Box::new(SystemClock),
        };
        Ok(Self {
            config,
            store: StateStore::new(db),
            clock,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Load the document with every record rolled over to today.
    pub fn load(&self) -> HealthDocument {
        let mut doc = self.store.load(self.today());
        ensure_today(&mut doc, self.today());
        doc
    }

    /// Persist the document; a dropped write is reported but not fatal.
    pub fn save(&self, doc: &HealthDocument) {
        if !self.store.save(doc) {
            eprintln!(
                "{}",
                "warning: changes could not be saved, previous data kept".yellow()
            );
        }
    }
}

/// Print `data` in the JSON envelope, or the human rendering.
pub fn emit(command: &str, human: bool, data: Value, text: impl FnOnce() -> String) -> Result<()> {
    if human {
        println!("{}", text());
    } else {
        let out = output::success(command, data);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
