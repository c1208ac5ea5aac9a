//! Data model for the entitlement glossary export/update tooling.
//!
//! Everything in this crate is free of network I/O:
//!
//! - **Record**: an entitlement search result reduced to its id and glossary
//! - **Flatten**: nested glossary objects turned into `outer_inner` columns
//! - **Header**: the fixed, ordered column set of one export run
//! - **Projector**: a flattened record padded out to the full column set
//! - **CSV**: quoted CSV writer and lazy reader for the hand-off file
//! - **Payload**: the per-row body sent back to the glossary endpoint

mod csv_io;
mod error;
mod flatten;
mod header;
mod payload;
mod projector;
mod record;

pub use csv_io::{GlossaryCsvReader, GlossaryCsvWriter};
pub use error::{ModelError, ModelResult};
pub use flatten::{flatten_glossary, render_value, FlattenedRow};
pub use header::{HeaderSet, ID_COLUMN};
pub use payload::{is_blank_row, UpdatePayload, BOOLEAN_COLUMNS, PAYLOAD_COLUMNS};
pub use projector::{project_row, Row};
pub use record::{EntitlementRecord, UNKNOWN_ID};
