//! Service layer module
//!
//! Contains the client facade, the per-resource services, dispatch helpers
//! and the HTTP transport

pub mod agents;
pub mod client;
pub mod compute;
pub mod database;
pub mod dispatch;
pub mod payments;
pub mod search;
pub mod transport;
pub mod vault;
pub mod voice;
pub mod workflows;

pub use agents::{Agents, Runs};
pub use client::Client;
pub use compute::Compute;
pub use database::Database;
pub use dispatch::{HttpMethod, Operation};
pub use payments::Payments;
pub use search::Search;
pub use transport::{ApiRequest, HttpTransport, RawResponse, RequestOptions, RetryConfig, Transport};
pub use vault::VaultService;
pub use voice::VoiceService;
pub use workflows::Workflows;
