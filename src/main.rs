use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{run_login, run_menu, Console};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::display::DisplayStyle;
use finance_tracker::services::{AuthService, Session};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack records income and expense transactions for each user \
                  and reports balances, monthly totals and category totals. \
                  Run it without a subcommand to log in and open the menu."
)]
struct Cli {
    /// Directory holding settings, accounts and ledgers
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized fintrack at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Accounts file:   {}", paths.users_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.display_date_format);
            println!("  Password scheme:    {:?}", settings.password_scheme);
            println!("  Login attempts:     {}", settings.login_attempts());
            println!("  Log level:          {}", settings.log_level);
        }
        None => run_interactive(paths, &settings)?,
    }

    Ok(())
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env("FINTRACK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_interactive(paths: TrackerPaths, settings: &Settings) -> Result<()> {
    let storage = Storage::new(paths)?;
    let style = DisplayStyle::from(settings);

    let stdin = io::stdin();
    let hidden = stdin.is_terminal();
    let mut console = Console::new(stdin.lock(), io::stdout().lock()).with_hidden_passwords(hidden);

    let auth = AuthService::new(&storage.credentials, settings.password_scheme);
    let username = match run_login(
        &mut console,
        &storage.credentials,
        &auth,
        settings.login_attempts(),
    ) {
        Ok(Some(username)) => username,
        Ok(None) => return Ok(()),
        Err(e) => {
            console.say(format!("Could not log in: {}", e))?;
            return Ok(());
        }
    };

    let session = match Session::open(storage.ledgers.clone(), username) {
        Ok(session) => session,
        Err(e) => {
            console.say(format!("Could not load your transactions: {}", e))?;
            return Ok(());
        }
    };

    run_menu(&mut console, session, &style)?;
    Ok(())
}
