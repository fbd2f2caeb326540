mod context;
mod format;
mod layout;
mod pdf;
mod wrap;

pub use context::{PDF_MIME_TYPE, ReportContext};
pub use format::{CURRENCY_PREFIX, format_file_date, format_idr, format_long_date};
pub use layout::{
    Align, Block, Element, FontStyle, PAGE_HEIGHT_IN, PAGE_WIDTH_IN, Page, REPORT_TITLE,
    ReportLayout, Rgb, TextRun, VAnchor, layout_report,
};
pub use wrap::{RECOMMENDATION_WRAP_WIDTH, wrap_words};

use tracing::debug;

use crate::error::RenderError;

pub fn render_report(context: &ReportContext) -> Result<Vec<u8>, RenderError> {
    let layout = layout_report(context);
    debug!(
        pages = layout.pages.len(),
        status = context.breakdown.status().label(),
        "report laid out"
    );
    pdf::write_pdf(&layout, REPORT_TITLE)
}
