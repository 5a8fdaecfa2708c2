//! Synthlab CLI
//!
//! Terminal front end for the synthetic-data backend:
//! - Show the real dataset table and the real vs. synthetic charts
//! - Log in
//! - Generate synthetic rows
//! - Print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use synthlab::config::generate_default_config;
use synthlab::{
    init_logging, Config, Credentials, DatasetLoader, GenerationRequest, HttpBackend,
    LoginOutcome, SessionHandler, TerminalPage,
};

#[derive(Parser)]
#[command(name = "synthlab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse real vs. synthetic datasets and drive synthetic data generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/synthlab/config.toml or ./synthlab.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the sample dataset table and both charts
    Datasets,

    /// Log in to the backend
    Login {
        #[arg(short, long)]
        username: String,
        /// Password (default: $SYNTHLAB_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Generate synthetic rows
    Generate {
        /// Number of rows, passed through as typed
        rows: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {}", path.display()))?;
                eprintln!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Logging is not up yet: config errors abort with their message
    let (mut config, source) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
        None => match Config::load_first(&Config::default_paths())? {
            Some((path, config)) => (config, Some(path)),
            None => (Config::from_env(), None),
        },
    };
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }
    if let Some(token) = cli.token {
        config.backend.token = Some(token);
    }

    init_logging(&config.logging)?;
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::debug!(backend = %config.backend.base_url, "Synthlab v{}", env!("CARGO_PKG_VERSION"));

    let backend = HttpBackend::new(&config.backend).context("building HTTP client")?;
    let mut page = TerminalPage::stdout();

    match cli.command {
        Commands::Datasets => {
            let loader = DatasetLoader::new(backend);
            if loader.load(&mut page).await.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Login { username, password } => {
            let password = password
                .or_else(|| std::env::var("SYNTHLAB_PASSWORD").ok())
                .context("no password given; pass --password or set SYNTHLAB_PASSWORD")?;

            let handler =
                SessionHandler::new(backend).with_home_path(config.navigation.home_path.clone());
            match handler
                .login(&Credentials::new(username, password), &mut page)
                .await
            {
                Ok(LoginOutcome::Success { token, .. }) => {
                    if let Some(token) = token {
                        page.write_line(&format!("export SYNTHLAB_TOKEN={}", token));
                    }
                }
                Ok(LoginOutcome::Rejected { .. }) => return Ok(ExitCode::from(2)),
                Err(_) => return Ok(ExitCode::FAILURE),
            }
        }

        Commands::Generate { rows } => {
            let handler = SessionHandler::new(backend);
            if handler
                .generate(&GenerationRequest::new(rows), &mut page)
                .await
                .is_err()
            {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}
