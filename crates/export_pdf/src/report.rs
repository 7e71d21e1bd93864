//! Claims report layout
//!
//! Builds the report against the [`DocumentBuilder`] seam so the layout
//! engine stays an external collaborator.

use chrono::{DateTime, Utc};

use domain_claims::ClaimWithLedger;

use crate::error::ExportError;

/// Title block of the claims report
pub const REPORT_TITLE: &str = "Reporte de Reclamos";

/// Placeholder rendered when a claim has a blank title
const MISSING_TITLE: &str = "Sin título";

/// Column headers, in render order
const TABLE_HEADER: [&str; 6] = [
    "ID",
    "Código",
    "Título",
    "Cliente ID",
    "Estado",
    "Fecha Creación",
];

/// Document-building capability required from the layout collaborator
pub trait DocumentBuilder {
    /// Adds an emphasized title block
    fn add_title(&mut self, text: &str) -> Result<(), ExportError>;

    /// Adds a plain text block
    fn add_paragraph(&mut self, text: &str) -> Result<(), ExportError>;

    /// Adds a table with one header row and the given body rows
    fn add_table(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<(), ExportError>;

    /// Serializes the document to bytes, consuming the builder
    fn finish(self) -> Result<Vec<u8>, ExportError>
    where
        Self: Sized;
}

/// A fully rendered report
#[derive(Debug, Clone)]
pub struct ReportDocument {
    /// Serialized document
    pub bytes: Vec<u8>,
    /// Generated filename embedding the generation timestamp
    pub filename: String,
    /// Number of claims rendered
    pub total_claims: usize,
}

/// Renders the claims report: title, generation stamp, one table row per
/// claim in the order the input provides (callers pass the listing order,
/// creation time descending), and a trailing total-count line.
pub fn render_claims_report<B: DocumentBuilder>(
    mut builder: B,
    claims: &[ClaimWithLedger],
    generated_at: DateTime<Utc>,
) -> Result<ReportDocument, ExportError> {
    builder.add_title(REPORT_TITLE)?;
    builder.add_paragraph(&format!(
        "Generado el: {}",
        generated_at.format("%d/%m/%Y %H:%M:%S")
    ))?;

    let rows: Vec<Vec<String>> = claims.iter().map(claim_row).collect();
    builder.add_table(&TABLE_HEADER, &rows)?;

    builder.add_paragraph(&format!("Total de reclamos: {}", claims.len()))?;

    let bytes = builder.finish()?;
    tracing::debug!(total = claims.len(), size = bytes.len(), "claims report rendered");

    Ok(ReportDocument {
        bytes,
        filename: format!("reclamos_{}.pdf", generated_at.format("%Y%m%d_%H%M%S")),
        total_claims: claims.len(),
    })
}

fn claim_row(view: &ClaimWithLedger) -> Vec<String> {
    let claim = &view.claim;
    let title = if claim.title.trim().is_empty() {
        MISSING_TITLE.to_string()
    } else {
        claim.title.clone()
    };

    vec![
        claim.id.to_string(),
        claim.code.clone(),
        title,
        claim.customer_id.to_string(),
        view.current_status().display_name().to_string(),
        claim.created_at.format("%d/%m/%Y %H:%M").to_string(),
    ]
}
