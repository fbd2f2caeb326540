use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect,
};
use tracing::debug;

use crate::error::RenderError;

use super::layout::{
    Align, Block, Element, FontStyle, PAGE_HEIGHT_IN, PAGE_WIDTH_IN, ReportLayout, Rgb, TextRun,
    VAnchor,
};

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;
const LAYER_NAME: &str = "Layer 1";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    mono: IndirectFontRef,
    mono_bold: IndirectFontRef,
}

impl Fonts {
    fn register(doc: &PdfDocumentReference) -> Result<Self, RenderError> {
        let add = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| RenderError::Pdf(e.to_string()))
        };
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            italic: add(BuiltinFont::HelveticaOblique)?,
            mono: add(BuiltinFont::Courier)?,
            mono_bold: add(BuiltinFont::CourierBold)?,
        })
    }

    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
            FontStyle::Mono => &self.mono,
            FontStyle::MonoBold => &self.mono_bold,
        }
    }
}

fn page_width_mm() -> f32 {
    PAGE_WIDTH_IN * MM_PER_INCH
}

fn page_height_mm() -> f32 {
    PAGE_HEIGHT_IN * MM_PER_INCH
}

fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_INCH * MM_PER_INCH
}

fn pdf_color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(rgb.0) / 255.0,
        f32::from(rgb.1) / 255.0,
        f32::from(rgb.2) / 255.0,
        None,
    ))
}

/// Advance width of one glyph in thousandths of an em.
///
/// Courier is exact. Helvetica uses a coarse table that is close enough for
/// centring headings and right-aligning short labels.
fn glyph_width(ch: char, style: FontStyle) -> f32 {
    match style {
        FontStyle::Mono | FontStyle::MonoBold => 600.0,
        FontStyle::Regular | FontStyle::Bold | FontStyle::Italic => {
            let base = match ch {
                ' ' | '.' | ',' | ':' | ';' | '!' | 'i' | 'j' | 'l' | '\'' | '|' => 278.0,
                'f' | 't' | 'r' | 'I' | '(' | ')' | '-' | '/' => 333.0,
                'm' | 'M' => 833.0,
                'w' | 'N' | 'H' | 'D' | 'U' | 'C' => 722.0,
                'W' => 944.0,
                'O' | 'G' | 'Q' => 778.0,
                '%' => 889.0,
                'A'..='Z' => 667.0,
                'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'c' => 500.0,
                _ => 556.0,
            };
            if style == FontStyle::Bold {
                base * 1.05
            } else {
                base
            }
        }
    }
}

fn text_width_mm(run: &TextRun) -> f32 {
    let em = run.text.chars().map(|ch| glyph_width(ch, run.style)).sum::<f32>();
    pt_to_mm(em / 1000.0 * run.size)
}

fn text_origin_mm(run: &TextRun) -> (f32, f32) {
    let anchor_x = run.x * page_width_mm();
    let x = match run.align {
        Align::Left => anchor_x,
        Align::Center => anchor_x - text_width_mm(run) / 2.0,
        Align::Right => anchor_x - text_width_mm(run),
    };

    let anchor_y = run.y * page_height_mm();
    let y = match run.anchor {
        VAnchor::Baseline => anchor_y,
        VAnchor::Center => anchor_y - pt_to_mm(run.size * 0.35),
        VAnchor::Top => anchor_y - pt_to_mm(run.size * 0.75),
    };
    (x, y)
}

fn draw_block(layer: &PdfLayerReference, block: &Block) {
    let x = block.x * page_width_mm();
    let y = block.y * page_height_mm();
    let width = block.width * page_width_mm();
    let height = block.height * page_height_mm();

    layer.set_fill_color(pdf_color(block.fill));
    let mode = match block.stroke {
        Some((stroke, thickness)) => {
            layer.set_outline_color(pdf_color(stroke));
            layer.set_outline_thickness(thickness);
            PaintMode::FillStroke
        }
        None => PaintMode::Fill,
    };
    layer.add_rect(Rect::new(Mm(x), Mm(y), Mm(x + width), Mm(y + height)).with_mode(mode));
}

fn draw_text(layer: &PdfLayerReference, fonts: &Fonts, run: &TextRun) {
    if run.text.is_empty() {
        return;
    }
    let (x, y) = text_origin_mm(run);
    layer.set_fill_color(pdf_color(run.color));
    layer.use_text(run.text.as_str(), run.size, Mm(x), Mm(y), fonts.get(run.style));
}

/// Serialises a laid-out report into PDF bytes, one A4 page per layout page.
pub fn write_pdf(layout: &ReportLayout, title: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(page_width_mm()),
        Mm(page_height_mm()),
        LAYER_NAME,
    );
    let fonts = Fonts::register(&doc)?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(page_width_mm()), Mm(page_height_mm()), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for element in &page.elements {
            match element {
                Element::Block(block) => draw_block(&layer, block),
                Element::Text(run) => draw_text(&layer, &fonts, run),
            }
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    debug!(
        pages = layout.pages.len(),
        bytes = bytes.len(),
        "report serialised"
    );
    Ok(bytes)
}
