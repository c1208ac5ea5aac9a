//! Governance API client for entitlement glossary export and update.
//!
//! # Export
//!
//! 1. **Authenticate**: exchange client credentials for a bearer token
//! 2. **Schema**: look up the declared glossary attribute names
//! 3. **Search**: page through the entitlement search, page 0 first to learn
//!    the total count
//! 4. **Write**: flatten, project onto the header set and write the CSV
//!
//! # Update
//!
//! Read the CSV back, skip rows with nothing but an `id`, and `PUT` each
//! remaining row to the entitlement's glossary endpoint. A failing row is
//! reported and the run carries on.
//!
//! # Example
//!
//! ```no_run
//! use glossary_client::{export_glossary, GlossaryConfig, GovernanceClient, TracingSink};
//!
//! # async fn run() -> glossary_client::ClientResult<()> {
//! let config = GlossaryConfig {
//!     base_url: "https://tenant.example.com".to_string(),
//!     client_id: "exporter".to_string(),
//!     client_secret: "secret".to_string(),
//!     search_string: "SNOW".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = GovernanceClient::new(config)?;
//! let summary = export_glossary(&client, &TracingSink).await?;
//! println!("wrote {} rows", summary.rows);
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod error;
pub mod events;
pub mod filter;
mod pipeline;
mod schema;
mod search;
mod update;

pub use auth::BearerToken;
pub use client::GovernanceClient;
pub use config::{GlossaryConfig, DEFAULT_SCOPE};
pub use error::{ClientError, ClientResult};
pub use events::{EventSink, GlossaryEvent, MemorySink, TracingSink};
pub use filter::{Filter, Target, TargetFilter};
pub use pipeline::{export_glossary, update_from_csv, ExportSummary};
pub use schema::schema_attribute_names;
pub use search::{page_count, SearchPage};
pub use update::{RowFailure, UpdateReport};

pub use glossary_model as model;
