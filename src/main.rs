use clap::Parser;
use sentra::application::manage_config::CONFIG_KEYS;
use sentra::application::{
    init::init, AnalysisController, AnalysisOutcome, ConfigService, JournalController,
};
use sentra::cli::shell::run_shell;
use sentra::cli::view::show_details;
use sentra::cli::{format_entry_list, format_trend_chart, Cli, Commands, TerminalView};
use sentra::domain::{project, ChartData, MoodLevel};
use sentra::error::{Result, SentraError};
use sentra::infrastructure::{
    EntryStore, FileEntryStore, FileSystemRepository, HttpClassifier, JournalRepository,
    SessionStore, TokioScheduler,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SENTRA_LOG").unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .try_init()
        .ok();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::Init { path, endpoint }) => {
            let config = init(&path, endpoint.as_deref())?;
            println!("Initialized sentra journal at {}", path.display());
            println!("Classifier endpoint: {}", config.endpoint);
            Ok(0)
        }
        Some(Commands::Write { text, mood }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let mood = mood
                .map(|m| m.parse::<MoodLevel>().map_err(|_| SentraError::InvalidMood(m)))
                .transpose()?;

            let mut journal = JournalController::new(
                FileEntryStore::for_repository(&repo),
                TerminalView::new(),
                TokioScheduler,
                config.date_format,
            );
            if let Some(level) = mood {
                journal.pick_mood(level);
            }
            journal.save(text.as_deref().unwrap_or(""))?;
            Ok(0)
        }
        Some(Commands::List) => {
            let repo = FileSystemRepository::discover()?;
            let entries = FileEntryStore::for_repository(&repo).read_all();
            println!("{}", format_entry_list(&entries));
            Ok(0)
        }
        Some(Commands::Trend) => {
            let repo = FileSystemRepository::discover()?;
            let entries = FileEntryStore::for_repository(&repo).read_all();
            let data = ChartData::from(project(&entries).as_slice());
            println!("{}", format_trend_chart(&data).trim_end());
            Ok(0)
        }
        Some(Commands::Analyze { text, details }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let classifier = HttpClassifier::from_config(&config)?;

            let mut analysis = AnalysisController::new(classifier.clone(), TerminalView::new());
            match analysis.classify(&text).await {
                AnalysisOutcome::Skipped => Ok(0),
                AnalysisOutcome::Failed => Ok(4),
                AnalysisOutcome::Classified(_) => {
                    if !details {
                        return Ok(0);
                    }
                    let session = SessionStore::for_repository(&repo);
                    analysis.follow_details_link(&text, &session)?;
                    println!();
                    show_details(&classifier, &session).await
                }
            }
        }
        Some(Commands::Details) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let classifier = HttpClassifier::from_config(&config)?;
            show_details(&classifier, &SessionStore::for_repository(&repo)).await
        }
        Some(Commands::Shell) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            run_shell(&repo, &config).await?;
            Ok(0)
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("endpoint = {}", config.endpoint);
                println!("date_format = {}", config.date_format);
                if let Some(secs) = config.request_timeout_secs {
                    println!("request_timeout_secs = {}", secs);
                }
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: sentra config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS);
            }
            Ok(0)
        }
        None => {
            println!("sentra - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(0)
        }
    }
}
