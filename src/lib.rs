//! Case.dev API client library
//!
//! Typed request/response models and async services for the Case.dev
//! agents, compute, database, payments, search, vault, voice and workflows
//! APIs.
//!
//! ```no_run
//! use casedev::models::agents::{AgentCreateParams, RunCreateParams};
//! use casedev::Client;
//!
//! # async fn demo() -> casedev::ClientResult<()> {
//! let client = Client::from_env()?;
//! let agent = client
//!     .agents()
//!     .create(AgentCreateParams::new("Summarize filings", "Summarizer"), None)
//!     .await?;
//! let run = client.runs().create(RunCreateParams::new(agent.id, "Summarize 10-K"), None).await?;
//! client.runs().exec(&run.id, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod models;
pub mod schema;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export common types
pub use config::Settings;
pub use schema::{Item, Model};
pub use services::{Client, HttpTransport, RequestOptions, Transport};
pub use utils::error::{ClientError, ClientResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
