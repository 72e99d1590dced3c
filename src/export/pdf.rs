use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::data::model::RowOutcome;
use crate::error::{Result, SmartTempError};

// ---------------------------------------------------------------------------
// Page geometry (points, US letter)
// ---------------------------------------------------------------------------

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 40.0;
const LEFT: f32 = 50.0;
const FONT_SIZE: f32 = 10.0;
const TITLE_GAP: f32 = 20.0;
const LINE_SPACING: f32 = 15.0;
const RECORD_GAP: f32 = 10.0;

/// One text line at an absolute position on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Lines of one page, top to bottom.
pub type PageLayout = Vec<PlacedLine>;

/// Place the title and one `key: value` line per field of every record.
///
/// A new page starts as soon as the cursor falls below the bottom margin
/// after a line; the gap between records does not trigger one by itself.
pub fn layout_pages(title: &str, outcomes: &[RowOutcome]) -> Vec<PageLayout> {
    let top = PAGE_HEIGHT - MARGIN;
    let mut pages: Vec<PageLayout> = vec![Vec::new()];
    let mut y = top;

    place(&mut pages, y, title.to_string());
    y -= TITLE_GAP;

    for outcome in outcomes {
        for (key, value) in outcome.fields() {
            place(&mut pages, y, format!("{key}: {value}"));
            y -= LINE_SPACING;
            if y < MARGIN {
                pages.push(Vec::new());
                y = top;
            }
        }
        y -= RECORD_GAP;
    }

    pages
}

fn place(pages: &mut [PageLayout], y: f32, text: String) {
    if let Some(page) = pages.last_mut() {
        page.push(PlacedLine { x: LEFT, y, text });
    }
}

/// Render `outcomes` into a PDF report at `path`.
pub fn export_pdf(path: &Path, title: &str, outcomes: &[RowOutcome]) -> Result<()> {
    if outcomes.is_empty() {
        return Err(SmartTempError::NoResults);
    }

    let pages = layout_pages(title, outcomes);
    let width = Mm::from(Pt(PAGE_WIDTH));
    let height = Mm::from(Pt(PAGE_HEIGHT));

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SmartTempError::Pdf(e.to_string()))?;

    for (i, lines) in pages.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);
        for line in lines {
            layer.use_text(
                line.text.clone(),
                FONT_SIZE,
                Mm::from(Pt(line.x)),
                Mm::from(Pt(line.y)),
                &font,
            );
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)
        .map_err(|e| SmartTempError::Pdf(e.to_string()))?;
    log::info!(
        "Exported {} rows on {} page(s) to {}",
        outcomes.len(),
        pages.len(),
        path.display()
    );
    Ok(())
}
