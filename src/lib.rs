//! # Synthlab
//!
//! Client for the synthetic-data backend: browse the real and synthetic
//! datasets side by side, log in, and ask the backend to generate rows.
//!
//! ## Modules
//!
//! - [`records`]: Sample records and their two known shapes
//! - [`dataset`]: Dataset table, bar charts and the page loader
//! - [`session`]: Login and generation form handling
//! - [`backend`]: The backend calls, plus the reqwest client
//! - [`view`]: Page surface traits and the terminal renderer
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! The `client` feature (on by default) brings in the native HTTP client,
//! configuration, logging and the CLI. The web UI uses the core with the
//! feature off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use synthlab::{Config, DatasetLoader, HttpBackend, TerminalPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let backend = HttpBackend::new(&config.backend)?;
//!
//!     let mut page = TerminalPage::stdout();
//!     let report = DatasetLoader::new(backend).load(&mut page).await?;
//!
//!     println!("Rendered {} rows", report.rows_rendered);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod dataset;
pub mod error;
pub mod records;
pub mod session;
pub mod view;

#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod logging;

pub use backend::{join_url, Backend, Endpoints, Reply, DEFAULT_BASE_URL};
pub use dataset::{BarChart, DatasetKind, DatasetLoader, DatasetTable, LoadError, LoadReport};
pub use error::{BackendError, BackendResult};
pub use records::{RecordShape, SampleRecord, TypedRecord};
pub use session::{
    Credentials, GenerationRequest, LoginOutcome, LoginResponse, SessionHandler,
    DEFAULT_HOME_PATH,
};
pub use view::{DatasetView, Notice, NoticeLevel, Notify, SessionView, TerminalPage};

#[cfg(feature = "client")]
pub use backend::HttpBackend;
#[cfg(feature = "client")]
pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, NavigationConfig};
#[cfg(feature = "client")]
pub use logging::{init_logging, LoggingError};
