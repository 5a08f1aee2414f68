mod dashboard;
mod report;

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use pioneer_core::i18n::share_text;
use pioneer_core::service::backup::backup_file_name;
use pioneer_core::time::{parse_hours, parse_human_date};
use pioneer_core::{
    aggregate, format_hours_minutes, parse_local_date, to_local_date_string, translate, Config, DailyEntry,
    EntryStore, FileEntryRepository, Language, Message, NewEntry, StoreError,
};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pioneer")]
#[command(about = "Log service hours and track them against a yearly goal", long_about = None)]
struct Cli {
    /// Custom config file location (default: ~/.pioneer/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language code, e.g. "en" or "it"
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Yearly goal in hours
    #[arg(long, global = true)]
    goal: Option<f64>,

    /// Reference date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log hours for a date (usage: add today 2.5, add 2025-01-10 1:30)
    Add {
        /// today, yesterday, -Nd or YYYY-MM-DD
        date: String,
        /// 2.5, 2,5, 1:30, 3h or 90m
        hours: String,
    },
    /// Delete an entry by ID (a unique prefix is enough)
    Delete { id: String },
    /// List all entries
    List,
    /// Hours for the current month and service year
    Summary,
    /// Progress against the yearly goal
    Progress,
    /// Monthly totals of the current service year
    History,
    /// Month calendar with hours per day
    Calendar {
        /// YYYY-MM, defaults to the current month
        month: Option<String>,
    },
    /// Print a shareable report line for a month
    Share {
        /// YYYY-MM
        month: String,
    },
    /// Write all entries to a JSON backup
    Export { path: Option<PathBuf> },
    /// Replace all entries with a JSON backup
    Import { path: PathBuf },
    /// Delete all entries
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Open the terminal dashboard
    Dashboard,
}

/// Settings resolved from flags, config file and environment.
pub struct Context {
    pub lang: Language,
    pub goal: f64,
    pub now: NaiveDate,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_language(flag: Option<&str>, config: Option<&str>) -> Language {
    flag.or(config)
        .and_then(Language::from_code)
        .or_else(|| env::var("LANG").ok().and_then(|l| Language::from_code(&l)))
        .unwrap_or_default()
}

/// Exact ID, or the single entry whose ID starts with `prefix`.
fn resolve_id(entries: &[DailyEntry], prefix: &str) -> Option<String> {
    if let Some(e) = entries.iter().find(|e| e.id == prefix) {
        return Some(e.id.clone());
    }
    let matches: Vec<&DailyEntry> = entries.iter().filter(|e| e.id.starts_with(prefix)).collect();
    match matches.as_slice() {
        [only] if !prefix.is_empty() => Some(only.id.clone()),
        _ => None,
    }
}

fn parse_month(month: &str) -> Result<NaiveDate> {
    parse_local_date(&format!("{}-01", month.trim()))
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let goal = cli.goal.unwrap_or(config.yearly_goal);
    if !(goal.is_finite() && goal > 0.0) {
        bail!("Goal must be a positive number of hours, got {}", goal);
    }
    let now = match &cli.now {
        Some(d) => parse_local_date(d)?,
        None => Local::now().date_naive(),
    };
    let ctx = Context {
        lang: resolve_language(cli.lang.as_deref(), config.language.as_deref()),
        goal,
        now,
    };

    let repo = FileEntryRepository::new(config.data_dir.clone())?;
    let mut store = EntryStore::open(repo);

    match cli.command {
        Some(Commands::Add { date, hours }) => {
            let date = parse_human_date(&date, ctx.now)?;
            let hours = parse_hours(&hours)?;
            match store.add(NewEntry::new(date, hours)) {
                Ok(entry) => {
                    let hours = format_hours_minutes(entry.hours);
                    let date = to_local_date_string(entry.date);
                    println!(
                        "{}",
                        translate(ctx.lang, Message::EntryAdded, &[hours.as_str(), date.as_str(), entry.id.as_str()])
                    );
                }
                Err(StoreError::Validation(reason)) => {
                    warn!("{}", reason);
                    println!("{}", translate(ctx.lang, Message::EntryInvalidHours, &[]));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Delete { id }) => match resolve_id(store.entries(), &id) {
            Some(full_id) => {
                store.delete(&full_id)?;
                println!("{}", translate(ctx.lang, Message::EntryDeleted, &[full_id.as_str()]));
            }
            None => println!("{}", translate(ctx.lang, Message::EntryNotFound, &[id.as_str()])),
        },
        Some(Commands::List) => report::print_entries(store.entries(), &ctx),
        Some(Commands::Summary) => report::print_summary(&store.totals(ctx.now), &ctx),
        Some(Commands::Progress) => report::print_progress(&store.progress(ctx.now, ctx.goal), &ctx),
        Some(Commands::History) => report::print_history(&store.totals(ctx.now), &ctx)?,
        Some(Commands::Calendar { month }) => {
            let first = match month {
                Some(m) => parse_month(&m)?,
                None => ctx.now,
            };
            report::print_calendar(&store.daily_hours(), first.year(), first.month(), &ctx)?;
        }
        Some(Commands::Share { month }) => {
            let first = parse_month(&month)?;
            let totals = aggregate(store.entries(), first);
            let key = pioneer_core::month_key(first);
            println!("{}", share_text(ctx.lang, &key, totals.month_hours(&key))?);
        }
        Some(Commands::Export { path }) => {
            let path = path.unwrap_or_else(|| PathBuf::from(backup_file_name(ctx.now)));
            fs::write(&path, store.export_json()?)?;
            let shown = path.display().to_string();
            println!("{}", translate(ctx.lang, Message::SettingsExportSuccess, &[shown.as_str()]));
        }
        Some(Commands::Import { path }) => {
            let text = fs::read_to_string(&path)?;
            match store.import_json(&text) {
                Ok(_) => println!("{}", translate(ctx.lang, Message::SettingsImportSuccess, &[])),
                Err(StoreError::Format(reason)) => {
                    warn!("import of {} rejected: {}", path.display(), reason);
                    println!("{}", translate(ctx.lang, Message::SettingsImportError, &[]));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Some(Commands::Clear { yes }) => {
            if yes {
                store.clear()?;
                println!("{}", translate(ctx.lang, Message::SettingsClearSuccess, &[]));
            } else {
                println!("{} (--yes)", translate(ctx.lang, Message::SettingsClearConfirm, &[]));
            }
        }
        Some(Commands::Dashboard) | None => {
            dashboard::run(store.entries(), &ctx)?;
        }
    }
    Ok(())
}
