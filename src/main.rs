use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use taskdeck::config::Config;
use taskdeck::logging::init_tracing;
use taskdeck::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Task manager with an AI assistant and image search")]
struct Cli {
    /// Config file (default: <config dir>/taskdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (overrides [logging] file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log in as this user on start
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Load and validate the config, print it and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }

    if cli.check_config {
        let mut printable = config.clone();
        // Never echo credentials.
        printable.assistant.api_key = printable.assistant.api_key.map(|_| "<set>".to_string());
        printable.images.access_key = printable.images.access_key.map(|_| "<set>".to_string());
        println!("# {}", config_path.display());
        print!("{}", toml::to_string_pretty(&printable)?);
        return Ok(());
    }

    let log_path = config.log_file();
    init_tracing(&log_path, &config.logging.level)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        log = %log_path.display(),
        "Starting taskdeck"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("taskdeck-http")
        .build()?;

    let result = runtime::run(
        config,
        &config_path,
        tokio_runtime.handle().clone(),
        cli.user,
    );
    if let Err(err) = &result {
        tracing::error!(error = %err, "UI exited with error");
    }
    tokio_runtime.shutdown_background();
    result
}
