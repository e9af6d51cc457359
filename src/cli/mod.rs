use std::path::{Path, PathBuf};

use ansi_term::{Colour, Style};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::{
    notify::{file_scheduler::FileScheduler, GenericNotifier, NotifierConfig},
    reminder::sync::{EnableOutcome, ReminderSync},
    store::file_index::FileIndexStore,
    utils::{clock::DefaultClock, dir::create_application_default_path, logging::enable_logging},
    words::WordList,
};

#[derive(Parser, Debug)]
#[command(name = "Wordaday", version)]
#[command(about = "Daily word of the day with an hourly reminder", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show today's word and keep the reminder in step with the day")]
    Today {},
    #[command(about = "Turn the hourly reminder on")]
    Enable {},
    #[command(about = "Turn the hourly reminder off")]
    Disable {},
    #[command(about = "Show the currently recorded reminder schedule")]
    Status {},
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(logging_level)?;

    let dir = match args.dir {
        Some(dir) => dir,
        None => create_application_default_path()?,
    };

    match args.commands {
        Commands::Today {} => show_today(&dir).await,
        Commands::Enable {} => enable_reminders(&dir).await,
        Commands::Disable {} => disable_reminders(&dir).await,
        Commands::Status {} => show_status(&dir).await,
    }
}

fn create_sync(dir: &Path) -> Result<ReminderSync<FileIndexStore, GenericNotifier>> {
    let words = WordList::load_builtin()?;
    let store = FileIndexStore::new(dir);
    let notifier = GenericNotifier::new(dir, NotifierConfig::default());
    Ok(ReminderSync::new(
        words,
        store,
        notifier,
        Box::new(DefaultClock),
    ))
}

async fn show_today(dir: &Path) -> Result<()> {
    let sync = create_sync(dir)?;
    let word = sync.current_word()?;

    println!("{}", Style::new().bold().paint("Word of the Day"));
    println!();
    println!("  {}", Colour::Cyan.bold().paint(word.word.as_str()));
    println!();
    println!("  {}", Style::new().underline().paint("Definition"));
    println!("  {}", word.definition);
    println!();
    println!("  {}", Style::new().underline().paint("Example"));
    println!("  \"{}\"", word.example);

    // Showing the word doubles as the day-rollover check.
    sync.sync_if_day_changed().await
}

async fn enable_reminders(dir: &Path) -> Result<()> {
    let sync = create_sync(dir)?;
    match sync.enable().await? {
        EnableOutcome::Enabled => {
            println!("Hourly reminders are now on.");
        }
        EnableOutcome::PermissionDenied => {
            println!(
                "{}",
                Colour::Red.paint(
                    "Permission required: please enable notifications in system settings."
                )
            );
        }
    }
    Ok(())
}

async fn disable_reminders(dir: &Path) -> Result<()> {
    create_sync(dir)?.disable().await?;
    println!("Hourly reminders are off.");
    Ok(())
}

async fn show_status(dir: &Path) -> Result<()> {
    let scheduler = FileScheduler::new(dir, NotifierConfig::default().handler);
    match scheduler.current().await? {
        Some(schedule) => {
            let minutes = schedule.request.interval.as_secs() / 60;
            println!(
                "Reminder every {minutes} minutes since {}.",
                schedule.scheduled_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!("  {}", schedule.request.body);
        }
        None => println!("No reminder scheduled."),
    }
    Ok(())
}
