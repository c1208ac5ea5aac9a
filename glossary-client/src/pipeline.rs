//! Export and update runs.

use crate::client::GovernanceClient;
use crate::error::ClientResult;
use crate::events::{EventSink, GlossaryEvent};
use crate::schema::schema_attribute_names;
use crate::update::UpdateReport;
use glossary_model::{flatten_glossary, project_row, GlossaryCsvReader, GlossaryCsvWriter, HeaderSet};
use std::path::PathBuf;
use tracing::info;

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    /// Attribute columns, not counting `id`.
    pub columns: usize,
}

/// Exports every matching entitlement's glossary to the configured CSV.
///
/// The header set is fixed from the configured attributes and the schema
/// before any row is written, so all rows share one column set.
pub async fn export_glossary(
    client: &GovernanceClient,
    sink: &dyn EventSink,
) -> ClientResult<ExportSummary> {
    let config = client.config();

    let token = client.authenticate().await?;
    sink.emit(&GlossaryEvent::Authenticated);

    let descriptors = client.fetch_schema(&token).await?;
    let header = HeaderSet::new(
        config.attributes.iter().cloned(),
        schema_attribute_names(&descriptors),
    );
    sink.emit(&GlossaryEvent::SchemaResolved {
        attributes: header.len(),
    });

    let records = client.fetch_entitlements(&token, sink).await?;

    let mut writer = GlossaryCsvWriter::create(&config.csv_path, header.clone())?;
    for record in &records {
        let flattened = flatten_glossary(&record.glossary);
        writer.write_row(&project_row(&header, &record.id, &flattened))?;
    }
    let rows = writer.rows_written();
    writer.finish()?;

    let summary = ExportSummary {
        path: config.csv_path.clone(),
        rows,
        columns: header.len(),
    };
    sink.emit(&GlossaryEvent::ExportWritten {
        path: summary.path.clone(),
        rows,
    });

    Ok(summary)
}

/// Pushes every row of the configured CSV back to the API.
pub async fn update_from_csv(
    client: &GovernanceClient,
    sink: &dyn EventSink,
) -> ClientResult<UpdateReport> {
    let config = client.config();
    let rows = GlossaryCsvReader::open(&config.csv_path)?;

    let token = client.authenticate().await?;
    sink.emit(&GlossaryEvent::Authenticated);

    let report = client.apply_rows(&token, rows, sink).await?;
    info!(
        "Update finished: {} updated, {} skipped, {} failed",
        report.updated.len(),
        report.skipped.len(),
        report.failed.len()
    );

    Ok(report)
}
