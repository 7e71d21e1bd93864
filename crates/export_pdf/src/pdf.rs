//! PDF adapter for the document-builder seam
//!
//! Lays the report out on A4 pages with the built-in Helvetica fonts, so
//! rendering needs no font files at runtime. Table columns use the fixed
//! weights of the original report layout; long cell text is truncated to
//! its column.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::error::ExportError;
use crate::report::DocumentBuilder;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 9.0;
/// Approximate glyph advance at body size, used for cell truncation
const CHAR_WIDTH_MM: f32 = 1.9;
/// Relative column widths: ID, Código, Título, Cliente ID, Estado, Fecha
const COLUMN_WEIGHTS: [f32; 6] = [1.0, 2.0, 3.0, 1.5, 2.0, 2.5];

/// [`DocumentBuilder`] implementation over `printpdf`
pub struct PdfReportBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    /// Baseline of the next line, measured from the page bottom
    cursor_mm: f32,
}

impl PdfReportBuilder {
    pub fn new(document_title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            document_title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "contenido",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(ExportError::rendering)?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(ExportError::rendering)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            font,
            font_bold,
            cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    /// Moves the cursor down, breaking to a fresh page when the bottom
    /// margin would be crossed
    fn advance(&mut self, height_mm: f32) {
        if self.cursor_mm - height_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "contenido");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.cursor_mm -= height_mm;
    }

    fn write_line(&mut self, text: &str, font_size: f32, bold: bool) {
        self.advance(font_size * 0.5 + 2.0);
        let font = if bold { &self.font_bold } else { &self.font };
        self.layer
            .use_text(text, font_size, Mm(MARGIN_MM), Mm(self.cursor_mm), font);
    }

    fn write_row(&mut self, cells: &[String], bold: bool) {
        self.advance(LINE_HEIGHT_MM);
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let weight_sum: f32 = COLUMN_WEIGHTS.iter().sum();

        let font = if bold { &self.font_bold } else { &self.font };
        let mut x = MARGIN_MM;
        for (cell, weight) in cells.iter().zip(COLUMN_WEIGHTS.iter()) {
            let width = usable * weight / weight_sum;
            let max_chars = (width / CHAR_WIDTH_MM) as usize;
            self.layer.use_text(
                truncated(cell, max_chars),
                BODY_SIZE,
                Mm(x),
                Mm(self.cursor_mm),
                font,
            );
            x += width;
        }
    }
}

impl DocumentBuilder for PdfReportBuilder {
    fn add_title(&mut self, text: &str) -> Result<(), ExportError> {
        self.write_line(text, TITLE_SIZE, true);
        Ok(())
    }

    fn add_paragraph(&mut self, text: &str) -> Result<(), ExportError> {
        self.write_line(text, BODY_SIZE, false);
        Ok(())
    }

    fn add_table(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<(), ExportError> {
        let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
        self.advance(2.0);
        self.write_row(&header_cells, true);
        for row in rows {
            self.write_row(row, false);
        }
        self.advance(2.0);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc.save_to_bytes().map_err(ExportError::rendering)
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_keeps_short_text() {
        assert_eq!(truncated("CLM-12345678", 20), "CLM-12345678");
    }

    #[test]
    fn test_truncation_marks_long_text() {
        let out = truncated("una descripción realmente interminable", 10);
        assert!(out.ends_with("..."));
        assert!(out.chars().count() <= 10);
    }
}
