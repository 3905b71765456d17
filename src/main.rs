//*** START FILE: src/main.rs ***//
use chrono::{Datelike, Days, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use uuid::Uuid;

use lessonweave::{
    export_plan, load_config_from_file, render_plan_text, reset_history, run_generation, Config, GenerationArgs,
    PlanRequest, PlanStore, SavedPlan,
};

#[derive(Parser, Debug)]
#[command(name = "lessonweave", version, about = "Bilingual (English + Tewa) preschool lesson plans")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PlanOptions {
    #[arg(long)]
    topic: String,
    #[arg(long, default_value = "")]
    classroom: String,
    /// Defaults to `default_age_group` from the config
    #[arg(long)]
    age_group: Option<String>,
    /// Generate even if a plan with the same topic already exists
    #[arg(long)]
    allow_duplicate: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single-day plan
    Day {
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Read-aloud title; picked automatically when omitted
        #[arg(long)]
        book: Option<String>,
        #[command(flatten)]
        options: PlanOptions,
    },
    /// Generate a Monday..Friday plan
    Week {
        /// YYYY-MM-DD, defaults to this week's Monday
        #[arg(long)]
        week_of: Option<NaiveDate>,
        /// Read-aloud titles in weekday order; repeat for each day
        #[arg(long = "book")]
        books: Vec<String>,
        #[command(flatten)]
        options: PlanOptions,
    },
    /// List saved plans, newest first
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Print a saved plan
    Show {
        id: Uuid,
        /// Print the JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a saved plan to a JSON file
    Export {
        id: Uuid,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Delete a saved plan
    Delete { id: Uuid },
    /// Forget used vocabulary; saved plans are kept
    ResetHistory,
}

fn this_monday() -> NaiveDate {
    let today = Local::now().date_naive();
    today
        .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))
        .unwrap_or(today)
}

fn generate(config: &Config, request: PlanRequest, options: PlanOptions) -> Result<(), Box<dyn Error>> {
    let args = GenerationArgs {
        request,
        topic: options.topic,
        classroom: options.classroom,
        age_group: options.age_group,
        allow_duplicate: options.allow_duplicate,
    };
    let saved = run_generation(config, &args)?;
    println!("Saved plan {}", saved.id);
    println!();
    print!("{}", render_plan_text(&saved.plan));
    Ok(())
}

fn find_or_fail(store: &PlanStore, id: Uuid) -> Result<&SavedPlan, Box<dyn Error>> {
    store
        .find(id)
        .ok_or_else(|| format!("No saved plan with id {} in {}", id, store.path().display()).into())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config_from_file(&cli.config)?;
    log::debug!("Loaded config from {}: {:?}", cli.config.display(), config);

    match cli.command {
        Command::Day { date, book, options } => {
            let request = PlanRequest::Day {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                book_title: book,
            };
            generate(&config, request, options)
        }
        Command::Week { week_of, books, options } => {
            let request = PlanRequest::Week {
                week_of: week_of.unwrap_or_else(this_monday),
                books,
            };
            generate(&config, request, options)
        }
        Command::List { search } => {
            let store = PlanStore::load(config.plans_path());
            let matches = store.search(search.as_deref().unwrap_or(""));
            if matches.is_empty() {
                println!("No saved plans.");
            }
            for saved in matches {
                println!(
                    "{}  {:<4}  {}  {}  [{}]  (created {})",
                    saved.id,
                    saved.plan.mode().as_str(),
                    saved.plan.anchor_date(),
                    saved.plan.topic(),
                    saved.plan.classroom(),
                    saved.created_at.format("%Y-%m-%d %H:%M")
                );
            }
            Ok(())
        }
        Command::Show { id, json } => {
            let store = PlanStore::load(config.plans_path());
            let saved = find_or_fail(&store, id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&saved.plan)?);
            } else {
                print!("{}", render_plan_text(&saved.plan));
            }
            Ok(())
        }
        Command::Export { id, out } => {
            let store = PlanStore::load(config.plans_path());
            let saved = find_or_fail(&store, id)?;
            let path = export_plan(&saved.plan, &out)?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        Command::Delete { id } => {
            let mut store = PlanStore::load(config.plans_path());
            if !store.delete(id) {
                return Err(format!("No saved plan with id {}", id).into());
            }
            store.save()?;
            println!("Deleted plan {}", id);
            Ok(())
        }
        Command::ResetHistory => {
            let history_path = config.history_path();
            reset_history(&history_path)?;
            println!("Vocabulary history cleared. Saved plans were not changed.");
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
//*** END FILE: src/main.rs ***//
