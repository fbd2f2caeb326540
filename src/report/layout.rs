// Coordinates are page fractions (`0.0..=1.0`), origin bottom-left.

use crate::core::BudgetStatus;

use super::context::ReportContext;
use super::format::{format_idr, format_long_date};
use super::wrap::{RECOMMENDATION_WRAP_WIDTH, wrap_words};

pub const PAGE_WIDTH_IN: f32 = 8.27;
pub const PAGE_HEIGHT_IN: f32 = 11.69;

pub const REPORT_TITLE: &str = "ANGGARAN KEUANGAN TAHUNAN (AKTA)";

const PAGE_TOP: f32 = 0.95;
const CONTENT_BOTTOM: f32 = 0.05;

const TABLE_LEFT: f32 = 0.1;
const TABLE_WIDTH: f32 = 0.8;
const ROW_HEIGHT: f32 = 0.022;
const BAR_HEIGHT: f32 = 0.025;
const RECOMMENDATION_LINE_HEIGHT: f32 = 0.018;
const RECOMMENDATION_PADDING: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const GRAY: Rgb = Rgb(0x80, 0x80, 0x80);
    pub const GREEN: Rgb = Rgb(0x2E, 0x7D, 0x32);
    pub const DARK_GREEN: Rgb = Rgb(0x1B, 0x5E, 0x20);
    pub const LIGHT_GREEN: Rgb = Rgb(0xC8, 0xE6, 0xC9);
    pub const PALE_GREEN: Rgb = Rgb(0xE8, 0xF5, 0xE9);
    pub const ZEBRA: Rgb = Rgb(0xF5, 0xF5, 0xF5);
    pub const RED: Rgb = Rgb(0xC6, 0x28, 0x28);
    pub const PINK: Rgb = Rgb(0xFF, 0xCD, 0xD2);

    pub fn over_white(self, alpha: f32) -> Rgb {
        let mix = |c: u8| (alpha * f32::from(c) + (1.0 - alpha) * 255.0).round() as u8;
        Rgb(mix(self.0), mix(self.1), mix(self.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    Mono,
    MonoBold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Baseline,
    Center,
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub size: f32,
    pub style: FontStyle,
    pub color: Rgb,
    pub align: Align,
    pub anchor: VAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Rgb,
    pub stroke: Option<(Rgb, f32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Block(Block),
    Text(TextRun),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(run) => Some(run),
            Element::Block(_) => None,
        })
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.elements.iter().filter_map(|element| match element {
            Element::Block(block) => Some(block),
            Element::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
    pub recommendation_lines: Vec<String>,
}

/// Banner fill, recommendation box fill and recommendation text colour.
fn status_palette(status: BudgetStatus) -> (Rgb, Rgb, Rgb) {
    match status {
        BudgetStatus::Surplus => (Rgb::GREEN, Rgb::LIGHT_GREEN, Rgb::GREEN),
        BudgetStatus::Deficit => (Rgb::RED, Rgb::PINK, Rgb::RED),
    }
}

struct PageBuilder {
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
            y: PAGE_TOP,
        }
    }

    fn text(
        &mut self,
        x: f32,
        y: f32,
        text: impl Into<String>,
        size: f32,
        style: FontStyle,
    ) -> &mut TextRun {
        self.current.elements.push(Element::Text(TextRun {
            x,
            y,
            text: text.into(),
            size,
            style,
            color: Rgb::BLACK,
            align: Align::Left,
            anchor: VAnchor::Baseline,
        }));
        match self.current.elements.last_mut() {
            Some(Element::Text(run)) => run,
            _ => unreachable!("text run was just pushed"),
        }
    }

    fn block(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgb) -> &mut Block {
        self.current.elements.push(Element::Block(Block {
            x,
            y,
            width,
            height,
            fill,
            stroke: None,
        }));
        match self.current.elements.last_mut() {
            Some(Element::Block(block)) => block,
            _ => unreachable!("block was just pushed"),
        }
    }

    /// Starts a new page when `height` no longer fits above the footer.
    fn reserve(&mut self, height: f32) {
        if self.y - height < CONTENT_BOTTOM {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.footer();
        self.pages.push(std::mem::take(&mut self.current));
        self.y = PAGE_TOP;
    }

    fn footer(&mut self) {
        let run = self.text(
            0.5,
            0.02,
            "AKTA - Anggaran Keuangan Tahunan",
            9.0,
            FontStyle::Italic,
        );
        run.align = Align::Center;
        run.color = Rgb::GRAY;

        let run = self.text(
            0.5,
            0.01,
            "Membantu Anda merencanakan keuangan dengan lebih baik",
            8.0,
            FontStyle::Italic,
        );
        run.align = Align::Center;
        run.color = Rgb::GRAY;
    }

    fn finish(mut self) -> Vec<Page> {
        self.footer();
        self.pages.push(self.current);
        self.pages
    }

    fn section_heading(&mut self, title: &str) {
        let y = self.y;
        self.text(0.1, y, title, 14.0, FontStyle::Bold).color = Rgb::DARK_GREEN;
    }

    fn field(&mut self, label: &str, value: impl Into<String>) {
        let y = self.y;
        self.text(0.12, y, label, 11.0, FontStyle::Bold);
        self.text(0.35, y, value, 11.0, FontStyle::Regular);
        self.y -= 0.025;
    }

    fn amount_field(&mut self, label: &str, amount: f64, boxed: bool) {
        let y = self.y;
        self.text(0.12, y, label, 11.0, FontStyle::Bold);
        if boxed {
            let block = self.block(0.36, y - 0.007, 0.15, 0.024, Rgb::LIGHT_GREEN);
            block.stroke = Some((Rgb::GREEN, 1.0));
        }
        self.text(0.5, y, format_idr(amount), 11.0, FontStyle::Mono).align = Align::Right;
        self.y -= 0.025;
    }

    /// Full-width bar with a label on the left and an amount on the right.
    fn bar(&mut self, label: &str, amount: f64, fill: Rgb, stroke: Rgb, text_color: Rgb) {
        let top = self.y;
        let mid = top - BAR_HEIGHT / 2.0;
        self.block(TABLE_LEFT, top - BAR_HEIGHT, TABLE_WIDTH, BAR_HEIGHT, fill)
            .stroke = Some((stroke, 1.0));

        let run = self.text(0.15, mid, label, 11.0, FontStyle::Bold);
        run.color = text_color;
        run.anchor = VAnchor::Center;

        let run = self.text(0.85, mid, format_idr(amount), 11.0, FontStyle::MonoBold);
        run.color = text_color;
        run.anchor = VAnchor::Center;
        run.align = Align::Right;
    }
}

pub fn layout_report(context: &ReportContext) -> ReportLayout {
    let breakdown = &context.breakdown;
    let status = breakdown.status();
    let (banner_fill, box_fill, advice_color) = status_palette(status);

    let mut page = PageBuilder::new();

    let title = page.text(0.5, PAGE_TOP, REPORT_TITLE, 20.0, FontStyle::Bold);
    title.align = Align::Center;
    title.anchor = VAnchor::Top;
    title.color = Rgb::GREEN;
    page.block(0.15, 0.915, 0.7, 0.0015, Rgb::GREEN);

    page.y = 0.87;
    page.section_heading("DATA DIRI");
    page.y -= 0.03;
    page.field("Nama:", context.person.name.as_str());
    page.field("Usia:", format!("{} tahun", context.person.age));
    page.field("Tanggal Dibuat:", format_long_date(&context.generated_at));
    page.y -= 0.025;

    page.section_heading("PEMASUKAN TAHUNAN");
    page.y -= 0.03;
    page.amount_field("Tetap:", context.income.fixed_income, false);
    page.amount_field("Tidak Tetap:", context.income.variable_income, false);
    page.amount_field("Total Pemasukan:", context.income.total_income(), true);
    page.amount_field(
        "Harga Per Gram Emas:",
        context.income.gold_price_per_gram,
        false,
    );
    page.y -= 0.025;

    page.section_heading("PENGELUARAN TAHUNAN");
    page.y -= 0.025;
    for caption in [
        "Pengeluaran tahunan ini merupakan pengeluaran yang dibagi pos sesuai",
        "prioritas pengeluaran keuangan",
    ] {
        let y = page.y;
        let run = page.text(0.1, y, caption, 9.0, FontStyle::Italic);
        run.color = Rgb::GRAY;
        page.y -= 0.02;
    }
    page.y -= 0.01;

    let top = page.y;
    let mid = top - BAR_HEIGHT / 2.0;
    page.block(TABLE_LEFT, top - BAR_HEIGHT, TABLE_WIDTH, BAR_HEIGHT, Rgb::GREEN)
        .stroke = Some((Rgb::GREEN, 1.0));
    for (x, label, align) in [
        (0.15, "Pos Pengeluaran", Align::Left),
        (0.45, "Persentase", Align::Center),
        (0.85, "Jumlah (Rp)", Align::Right),
    ] {
        let run = page.text(x, mid, label, 10.0, FontStyle::Bold);
        run.color = Rgb::WHITE;
        run.align = align;
        run.anchor = VAnchor::Center;
    }
    page.y -= 0.04;

    for (i, item) in breakdown.line_items().iter().enumerate() {
        page.reserve(ROW_HEIGHT);
        let fill = if item.highlighted {
            Rgb::PALE_GREEN
        } else if i % 2 == 0 {
            Rgb::ZEBRA
        } else {
            Rgb::WHITE
        };

        let top = page.y;
        let mid = top - ROW_HEIGHT / 2.0;
        page.block(TABLE_LEFT, top - ROW_HEIGHT, TABLE_WIDTH, ROW_HEIGHT, fill)
            .stroke = Some((Rgb::GRAY, 0.5));

        let indent = 0.02 * f32::from(item.depth);
        page.text(0.12 + indent, mid, item.label, 9.0, FontStyle::Regular)
            .anchor = VAnchor::Center;

        let run = page.text(0.45, mid, item.annotation, 8.0, FontStyle::Regular);
        run.anchor = VAnchor::Center;
        run.align = Align::Center;

        let run = page.text(0.88, mid, format_idr(item.annual), 9.0, FontStyle::Mono);
        run.anchor = VAnchor::Center;
        run.align = Align::Right;

        page.y -= ROW_HEIGHT;
    }
    page.y -= 0.02;

    page.reserve(BAR_HEIGHT * 2.0 + 0.005);
    page.bar(
        "Total Anggaran",
        breakdown.grand_total,
        Rgb::LIGHT_GREEN,
        Rgb::GREEN,
        Rgb::BLACK,
    );
    page.y -= 0.03;
    page.bar(
        status.label(),
        breakdown.surplus_or_deficit.abs(),
        banner_fill,
        banner_fill,
        Rgb::WHITE,
    );
    page.y -= 0.04;

    let lines = wrap_words(status.recommendation(), RECOMMENDATION_WRAP_WIDTH);
    let box_height =
        lines.len() as f32 * RECOMMENDATION_LINE_HEIGHT + RECOMMENDATION_PADDING;
    page.reserve(box_height);
    let top = page.y;
    page.block(TABLE_LEFT, top - box_height, TABLE_WIDTH, box_height, box_fill.over_white(0.3))
        .stroke = Some((advice_color, 1.0));
    for (i, line) in lines.iter().enumerate() {
        let y = top - 0.015 - i as f32 * RECOMMENDATION_LINE_HEIGHT;
        let run = page.text(0.12, y, line.as_str(), 9.0, FontStyle::Regular);
        run.color = advice_color;
        run.anchor = VAnchor::Top;
    }
    page.y -= box_height;

    ReportLayout {
        pages: page.finish(),
        recommendation_lines: lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawBudgetInput, validate_input};
    use chrono::{Local, TimeZone};

    fn sample_context() -> ReportContext {
        let request = validate_input(RawBudgetInput {
            name: "Siti Aminah".to_string(),
            age: 25,
            fixed_income: 250_000_000.0,
            variable_income: 150_000_000.0,
            gold_price_per_gram: 2_800_000.0,
        })
        .expect("valid input");
        let at = Local.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
        ReportContext::new(&request, request.allocate(), at)
    }

    fn find_text<'a>(page: &'a Page, text: &str) -> Option<&'a TextRun> {
        page.texts().find(|run| run.text == text)
    }

    #[test]
    fn surplus_report_fits_on_one_page() {
        let layout = layout_report(&sample_context());
        assert_eq!(layout.pages.len(), 1);
        assert_eq!(layout.recommendation_lines.len(), 5);

        for block in layout.pages[0].blocks() {
            assert!(block.y >= CONTENT_BOTTOM, "block below footer: {block:?}");
        }
    }

    #[test]
    fn layout_contains_personal_and_income_sections() {
        let layout = layout_report(&sample_context());
        let page = &layout.pages[0];

        assert!(find_text(page, REPORT_TITLE).is_some());
        assert!(find_text(page, "Siti Aminah").is_some());
        assert!(find_text(page, "25 tahun").is_some());
        assert!(find_text(page, "18 October 2026").is_some());
        assert!(find_text(page, "Rp 250.000.000").is_some());
        assert!(find_text(page, "Rp 2.800.000").is_some());
    }

    #[test]
    fn expenditure_table_has_eight_rows_with_debt_highlighted() {
        let layout = layout_report(&sample_context());
        let page = &layout.pages[0];

        let row_blocks: Vec<&Block> = page
            .blocks()
            .filter(|block| (block.height - ROW_HEIGHT).abs() < f32::EPSILON)
            .collect();
        assert_eq!(row_blocks.len(), 8);
        assert_eq!(row_blocks[0].fill, Rgb::ZEBRA);
        assert_eq!(row_blocks[1].fill, Rgb::WHITE);
        assert_eq!(row_blocks[2].fill, Rgb::PALE_GREEN);
        assert_eq!(
            row_blocks
                .iter()
                .filter(|block| block.fill == Rgb::PALE_GREEN)
                .count(),
            1
        );

        let debt = find_text(page, "Pos Utang").expect("debt row");
        let productive = find_text(page, "a. Utang Produktif").expect("sub row");
        assert!(productive.x > debt.x);
        assert!(find_text(page, "(Max 35%)").is_some());
        assert_eq!(
            page.texts()
                .filter(|run| run.text == "Rp 140.000.000")
                .count(),
            2
        );
    }

    #[test]
    fn surplus_banner_uses_accent_colour() {
        let layout = layout_report(&sample_context());
        let page = &layout.pages[0];

        let label = find_text(page, "Surplus").expect("status label");
        assert_eq!(label.color, Rgb::WHITE);
        assert!(page.blocks().any(|block| block.fill == Rgb::GREEN
            && (block.height - BAR_HEIGHT).abs() < f32::EPSILON
            && block.y < label.y));
        assert!(find_text(page, "Rp 400.000.000").is_some());
        assert!(layout.recommendation_lines[0].starts_with("SELAMAT"));
    }

    #[test]
    fn deficit_context_switches_banner_and_advice() {
        let mut context = sample_context();
        context.breakdown.discretionary_spending -= 5_000_000.0;
        context.breakdown.grand_total += 5_000_000.0;
        context.breakdown.surplus_or_deficit = -5_000_000.0;

        let layout = layout_report(&context);
        let page = &layout.pages[0];

        assert!(find_text(page, "Defisit").is_some());
        assert!(find_text(page, "Surplus").is_none());
        assert!(find_text(page, "Rp 5.000.000").is_some());
        assert!(page.blocks().any(|block| block.fill == Rgb::RED));
        assert!(layout.recommendation_lines[0].starts_with("PERINGATAN"));
        assert_eq!(layout.recommendation_lines.len(), 4);
    }

    #[test]
    fn recommendation_box_height_tracks_line_count() {
        let layout = layout_report(&sample_context());
        let expected = 5.0 * RECOMMENDATION_LINE_HEIGHT + RECOMMENDATION_PADDING;
        assert!(
            layout.pages[0]
                .blocks()
                .any(|block| (block.height - expected).abs() < 1e-6)
        );
    }

    #[test]
    fn overflowing_content_breaks_onto_a_new_page_with_footer() {
        let mut page = PageBuilder::new();
        page.y = 0.1;
        page.reserve(0.2);
        assert_eq!(page.y, PAGE_TOP);

        let pages = page.finish();
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert!(
                page.texts()
                    .any(|run| run.text == "AKTA - Anggaran Keuangan Tahunan")
            );
        }
    }

    #[test]
    fn layout_is_deterministic_for_same_context() {
        let context = sample_context();
        assert_eq!(layout_report(&context), layout_report(&context));
    }

    #[test]
    fn translucent_fill_is_flattened_over_white() {
        assert_eq!(Rgb::BLACK.over_white(0.5), Rgb(128, 128, 128));
        assert_eq!(Rgb::WHITE.over_white(0.3), Rgb::WHITE);
    }
}
