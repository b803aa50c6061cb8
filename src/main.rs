// src/main.rs

use chrono::Local;
use std::error::Error;
use std::io::{self, Write};

use life_patterns::error::RunError;
use life_patterns::logging::{init_logging, DEFAULT_LOG_LEVEL};
use life_patterns::orchestrator::{run, RunConfig};

fn main() -> Result<(), Box<dyn Error>> {
    if let Err(err) = init_logging(DEFAULT_LOG_LEVEL) {
        eprintln!("Warning: diagnostic logging disabled: {err}");
    }

    print!("📅 Enter your birthdate (YYYY-MM-DD): ");
    io::stdout().flush()?;

    let mut birthdate = String::new();
    io::stdin().read_line(&mut birthdate)?;

    let now = Local::now().naive_local();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&birthdate, now, &RunConfig::default(), &mut out) {
        Ok(_) => Ok(()),
        Err(RunError::Age(err)) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

// src/main.rs
