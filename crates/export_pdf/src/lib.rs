//! Claims Report Export
//!
//! Renders the tabular claims report (one row per claim with its derived
//! current status) as a portable document. The layout engine sits behind
//! the [`DocumentBuilder`] seam: the report logic only asks for text
//! blocks, a header+rows table, and final serialization to bytes. The
//! production implementation is [`PdfReportBuilder`] on top of `printpdf`.
//!
//! A rendering failure at any step aborts the whole report; a partial
//! document is never returned.

pub mod error;
pub mod pdf;
pub mod report;

pub use error::ExportError;
pub use pdf::PdfReportBuilder;
pub use report::{render_claims_report, DocumentBuilder, ReportDocument, REPORT_TITLE};
