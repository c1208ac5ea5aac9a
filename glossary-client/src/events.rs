//! Run events.
//!
//! Every component reports progress, skips and per-row failures through an
//! [`EventSink`] instead of printing. The binary uses [`TracingSink`]; tests
//! collect events with [`MemorySink`]. Any `Fn(&GlossaryEvent)` closure is a
//! sink as well.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

/// Something that happened during an export or update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossaryEvent {
    /// A bearer token was obtained.
    Authenticated,
    /// The schema lookup finished; `attributes` is the final column count.
    SchemaResolved { attributes: usize },
    /// One search page arrived.
    PageFetched { page: u64, pages: u64, items: usize },
    /// The export CSV was written.
    ExportWritten { path: PathBuf, rows: usize },
    /// A row's glossary was updated.
    RowUpdated { id: String },
    /// A row had no values besides its id.
    RowSkipped { id: String },
    /// A row's update was rejected or never reached the server.
    RowFailed { id: String, reason: String },
}

/// Receives run events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &GlossaryEvent);
}

impl<F> EventSink for F
where
    F: Fn(&GlossaryEvent) + Send + Sync,
{
    fn emit(&self, event: &GlossaryEvent) {
        self(event)
    }
}

/// Logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &GlossaryEvent) {
        match event {
            GlossaryEvent::Authenticated => info!("Authenticated"),
            GlossaryEvent::SchemaResolved { attributes } => {
                info!("Header resolved with {} attribute columns", attributes)
            }
            GlossaryEvent::PageFetched { page, pages, items } => {
                info!("Fetched page {}/{} ({} items)", page + 1, (*pages).max(1), items)
            }
            GlossaryEvent::ExportWritten { path, rows } => {
                info!("Data successfully exported to {} ({} rows)", path.display(), rows)
            }
            GlossaryEvent::RowUpdated { id } => info!("Successfully updated entitlement {}", id),
            GlossaryEvent::RowSkipped { id } => {
                info!("Skipping update for {} as all other fields are empty", id)
            }
            GlossaryEvent::RowFailed { id, reason } => {
                warn!("Failed to update entitlement {}: {}", id, reason)
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<GlossaryEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<GlossaryEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &GlossaryEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
