use anyhow::Result;
use std::io::{self, Write};

use healthplanner::db::Database;
use healthplanner::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("Health Planner — Initial Setup\n");
        config.water_goal = prompt_u32("Daily water goal (glasses)", config.water_goal)?;
        config.recipes.default_count =
            prompt_u32("Meals to suggest at a time", config.recipes.default_count)?;
    }

    config.save()?;
    Database::open(&Config::db_path())?;

    if skip {
        println!("Config initialized with defaults at {:?}", Config::path());
    } else {
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    }
    Ok(())
}

fn prompt_u32(label: &str, default: u32) -> Result<u32> {
    loop {
        print!("{} [{}]: ", label, default);
        io::stdout().flush()?;
        let mut buf = String::new();
        io::stdin().read_line(&mut buf)?;
        let s = buf.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) if v > 0 => return Ok(v),
            _ => println!("Please enter a whole number above zero."),
        }
    }
}
