//! PDF rendering of a planned [`FinancialReport`] with the builtin Helvetica faces.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use super::{plan_pages, FinancialReport, LineKind, PlacedLine, MARGIN_X_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::errors::{Result, WalletError};
use crate::utils::paths::ensure_dir;

const TITLE_SIZE: f32 = 20.0;
const DATE_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 14.0;
const TABLE_SIZE: f32 = 9.0;
/// Rough Helvetica advance per character at [`TABLE_SIZE`], in millimetres.
const CHAR_WIDTH_MM: f32 = 1.8;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Builtin PDF fonts only cover WinAnsi, so Turkish letters outside it are
/// folded to their closest ASCII form.
pub fn fold_to_ascii(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'ç' => 'c',
            'Ç' => 'C',
            'ğ' => 'g',
            'Ğ' => 'G',
            'ı' => 'i',
            'İ' => 'I',
            'ö' => 'o',
            'Ö' => 'O',
            'ş' => 's',
            'Ş' => 'S',
            'ü' => 'u',
            'Ü' => 'U',
            other if other.is_ascii() => other,
            _ => '?',
        })
        .collect()
}

/// Renders the report and returns the encoded document.
pub fn render(report: &FinancialReport) -> Result<Vec<u8>> {
    let pages = plan_pages(report);
    let (doc, first_page, first_layer) = PdfDocument::new(
        fold_to_ascii(&report.title),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(report_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(report_error)?,
    };

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            add_page(&doc, index)
        };
        for line in &page.lines {
            draw_line(&layer, &fonts, line);
        }
    }

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer).map_err(report_error)?;
    writer
        .into_inner()
        .map_err(|err| WalletError::Report(err.to_string()))
}

/// Renders the report into `dir` under its own file name.
pub fn write_report(report: &FinancialReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&report.file_name);
    save(report, &path)?;
    Ok(path)
}

/// Renders the report to an explicit file path.
pub fn save(report: &FinancialReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let bytes = render(report)?;
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), "financial report written");
    Ok(())
}

fn add_page(doc: &PdfDocumentReference, index: usize) -> PdfLayerReference {
    let (page, layer) = doc.add_page(
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        format!("Layer {}", index + 1),
    );
    doc.get_page(page).get_layer(layer)
}

fn draw_line(layer: &PdfLayerReference, fonts: &Fonts, line: &PlacedLine) {
    let baseline = PAGE_HEIGHT_MM - line.y;
    match line.kind {
        LineKind::Title => {
            let text = line.cells.join(" ");
            layer.use_text(fold_to_ascii(&text), TITLE_SIZE, Mm(MARGIN_X_MM), Mm(baseline), &fonts.bold);
        }
        LineKind::DateLine => {
            let text = line.cells.join(" ");
            layer.use_text(fold_to_ascii(&text), DATE_SIZE, Mm(MARGIN_X_MM), Mm(baseline), &fonts.regular);
        }
        LineKind::Heading => {
            let text = fold_to_ascii(&line.cells.join(" ")).to_uppercase();
            layer.use_text(text, HEADING_SIZE, Mm(MARGIN_X_MM), Mm(baseline), &fonts.bold);
        }
        LineKind::TableHeader => {
            draw_cells(layer, &fonts.bold, &line.cells, baseline);
            rule(layer, baseline - 1.5);
        }
        LineKind::Row => draw_cells(layer, &fonts.regular, &line.cells, baseline),
    }
}

fn draw_cells(layer: &PdfLayerReference, font: &IndirectFontRef, cells: &[String], baseline: f32) {
    if cells.is_empty() {
        return;
    }
    let column_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM) / cells.len() as f32;
    let max_chars = ((column_width - 2.0) / CHAR_WIDTH_MM).max(1.0) as usize;
    for (idx, cell) in cells.iter().enumerate() {
        let x = MARGIN_X_MM + column_width * idx as f32;
        layer.use_text(clip(&fold_to_ascii(cell), max_chars), TABLE_SIZE, Mm(x), Mm(baseline), font);
    }
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_X_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_X_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    clipped.push_str("..");
    clipped
}

fn report_error(err: impl std::fmt::Display) -> WalletError {
    WalletError::Report(err.to_string())
}
