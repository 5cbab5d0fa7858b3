mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, LogAction, ReminderAction};
use healthplanner::error::HealthError;
use healthplanner::models::config::Config;
use healthplanner::{output, telemetry};
use std::process;

fn main() {
    let cli = Cli::parse();

    let level = Config::load()
        .map(|c| c.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    telemetry::init(&level);

    let name = cli.command.name();
    let ctx = cmd::Ctx {
        date: cli.date,
        human: cli.human,
    };

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Today => cmd::show::run_today(&ctx),
        Commands::Week => cmd::show::run_week(&ctx),
        Commands::Water { action } => cmd::track::run_water(&ctx, action),
        Commands::Sleep { hours } => cmd::track::run_sleep(&ctx, &hours),
        Commands::Steps { count } => cmd::track::run_steps(&ctx, &count),
        Commands::Mood { label } => cmd::track::run_mood(&ctx, &label),
        Commands::Bmi {
            weight_kg,
            height_cm,
        } => cmd::track::run_bmi(&ctx, weight_kg, height_cm),
        Commands::Log { action } => match action {
            LogAction::Add { text } => cmd::log::run_add(&ctx, &text.join(" ")),
            LogAction::Show => cmd::log::run_show(&ctx),
            LogAction::Clear => cmd::log::run_clear(&ctx),
        },
        Commands::Theme { mode } => cmd::theme::run(&ctx, mode),
        Commands::Reminder { action } => match action {
            ReminderAction::Add { text, at } => cmd::reminder::run_add(&ctx, &text, at.as_deref()),
            ReminderAction::List => cmd::reminder::run_list(&ctx),
            ReminderAction::Remove { id } => cmd::reminder::run_remove(&ctx, &id),
        },
        Commands::Recipes {
            count,
            category,
            categories,
        } => {
            if categories {
                cmd::recipes::run_categories(&ctx)
            } else {
                cmd::recipes::run(&ctx, count, category.as_deref())
            }
        }
        Commands::Reset { yes } => cmd::reset::run(&ctx, yes),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(ctx.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<HealthError>()
            .map(HealthError::code)
            .unwrap_or("general_error");
        let err = output::error(name, code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
