use log::debug;

use gcounsel_core::consts::{NO_GENE_FUNCTION, NO_GENE_INFO, NO_MUTATION_INFO};
use gcounsel_core::models::{GeneFunction, GeneMetadata, GeneReportEntry, Variant};

use crate::consts::{LETTER_HEIGHT, LETTER_WIDTH, REPORT_TITLE};
use crate::metrics::Font;
use crate::wrap::wrap_text;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const TITLE_BLUE: Rgb = Rgb(0.2, 0.4, 0.6);
}

/// One positioned drawing instruction. Coordinates are PDF points from the bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text runs on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Line { .. } => None,
        })
    }

    /// Lowest baseline of any text run on the page.
    pub fn lowest_text_y(&self) -> Option<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                DrawOp::Line { .. } => None,
            })
            .reduce(f32::min)
    }
}

///
/// Page geometry, fonts and vertical spacing of the report.
///
/// The defaults describe a US letter page with the title 70 pt below the top edge, a
/// 120 pt left offset and a 60 pt bottom margin.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    /// Distance from the top edge to the title baseline.
    pub title_offset: f32,
    /// Gap between the title baseline and the first content line.
    pub title_gap: f32,
    /// Content below this baseline triggers a page break.
    pub bottom_margin: f32,
    pub left_offset: f32,
    pub right_padding: f32,
    pub title_size: f32,
    pub header_size: f32,
    pub body_size: f32,
    pub line_height: f32,
    pub header_gap: f32,
    pub placeholder_gap: f32,
    pub metadata_gap: f32,
    pub section_gap: f32,
    pub variant_gap: f32,
    /// Extra length of the separator beyond the content width.
    pub separator_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            title: REPORT_TITLE.to_string(),
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            title_offset: 70.0,
            title_gap: 30.0,
            bottom_margin: 60.0,
            left_offset: 120.0,
            right_padding: 100.0,
            title_size: 14.0,
            header_size: 12.0,
            body_size: 10.0,
            line_height: 15.0,
            header_gap: 30.0,
            placeholder_gap: 20.0,
            metadata_gap: 20.0,
            section_gap: 40.0,
            variant_gap: 20.0,
            separator_padding: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Width budget for wrapped body text.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.left_offset - self.right_padding
    }

    pub fn title_y(&self) -> f32 {
        self.page_height - self.title_offset
    }

    pub fn content_top(&self) -> f32 {
        self.title_y() - self.title_gap
    }
}

/// A fully laid out report, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

/// Current vertical position on the open page.
#[derive(Debug, Clone, Copy)]
struct LayoutCursor {
    y: f32,
}

struct Paginator<'a> {
    config: &'a LayoutConfig,
    pages: Vec<Page>,
    page: Page,
    cursor: LayoutCursor,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a LayoutConfig) -> Self {
        let mut paginator = Paginator {
            config,
            pages: Vec::new(),
            page: Page::default(),
            cursor: LayoutCursor {
                y: config.content_top(),
            },
        };
        paginator.draw_title();
        paginator
    }

    fn draw_title(&mut self) {
        let cfg = self.config;
        self.page.ops.push(DrawOp::Text {
            x: cfg.left_offset,
            y: cfg.title_y(),
            font: Font::Helvetica,
            size: cfg.title_size,
            color: Rgb::TITLE_BLUE,
            text: cfg.title.clone(),
        });
        self.cursor.y = cfg.content_top();
    }

    /// Break the page if the cursor is below the bottom margin. Called before every unit.
    fn ensure_room(&mut self) {
        if self.cursor.y < self.config.bottom_margin {
            let finished = std::mem::take(&mut self.page);
            self.pages.push(finished);
            debug!("Page {} full, starting a new one", self.pages.len());
            self.draw_title();
        }
    }

    fn text(&mut self, text: &str, font: Font, size: f32) {
        self.page.ops.push(DrawOp::Text {
            x: self.config.left_offset,
            y: self.cursor.y,
            font,
            size,
            color: Rgb::BLACK,
            text: text.to_string(),
        });
    }

    fn header(&mut self, text: &str) {
        self.ensure_room();
        let size = self.config.header_size;
        let x = self.config.left_offset;
        let underline_y = self.cursor.y - 2.0;
        let width = Font::HelveticaBold.string_width(text, size);

        self.text(text, Font::HelveticaBold, size);
        self.page.ops.push(DrawOp::Line {
            x1: x,
            y1: underline_y,
            x2: x + width,
            y2: underline_y,
            width: 1.0,
            color: Rgb::BLACK,
        });
        self.cursor.y -= self.config.header_gap;
    }

    fn paragraph(&mut self, text: &str) {
        let size = self.config.body_size;
        for line in wrap_text(text, self.config.content_width(), Font::Helvetica, size) {
            self.ensure_room();
            self.text(&line, Font::Helvetica, size);
            self.cursor.y -= self.config.line_height;
        }
    }

    fn placeholder(&mut self, text: &str) {
        self.ensure_room();
        self.text(text, Font::Helvetica, self.config.body_size);
        self.cursor.y -= self.config.placeholder_gap;
    }

    fn gap(&mut self, amount: f32) {
        self.cursor.y -= amount;
    }

    fn separator(&mut self) {
        self.ensure_room();
        let cfg = self.config;
        self.page.ops.push(DrawOp::Line {
            x1: cfg.left_offset,
            y1: self.cursor.y,
            x2: cfg.left_offset + cfg.content_width() + cfg.separator_padding,
            y2: self.cursor.y,
            width: 1.0,
            color: Rgb::BLACK,
        });
    }

    fn metadata_section(&mut self, metadata: Option<&GeneMetadata>) {
        match metadata {
            Some(meta) => {
                for (label, value) in meta.attributes() {
                    self.paragraph(&format!("{label}: {value}"));
                }
            }
            None => self.placeholder(NO_GENE_INFO),
        }
    }

    fn function_section(&mut self, function: Option<&GeneFunction>) {
        match function {
            Some(function) => {
                self.paragraph(&format!("Name: {}", function.name()));
                self.paragraph(&format!("Symbol: {}", function.symbol()));
                self.paragraph(&format!("Function Summary: {}", function.summary()));
            }
            None => self.placeholder(NO_GENE_FUNCTION),
        }
    }

    fn mutation_section(&mut self, variants: Option<Vec<&Variant>>) {
        match variants {
            Some(variants) => {
                for variant in variants {
                    self.paragraph(&format!("Variation: {}", variant.id));
                    self.paragraph(&format!("Location: {}", variant.location));
                    self.paragraph(&format!("Consequence: {}", variant.consequence_label()));
                    self.paragraph(&format!("Alleles: {}", variant.allele));
                    self.gap(self.config.variant_gap);
                }
            }
            None => self.placeholder(NO_MUTATION_INFO),
        }
    }

    fn entry(&mut self, entry: &GeneReportEntry) {
        let cfg = self.config;

        self.header(&format!("Gene Information: {}", entry.symbol()));
        self.metadata_section(entry.metadata.found());
        self.gap(cfg.metadata_gap);

        self.header("Gene Function:");
        self.function_section(entry.function.found());
        self.gap(cfg.section_gap);

        self.header("Mutation Interpretation:");
        self.mutation_section(entry.variants());

        self.gap(cfg.section_gap);
        self.separator();
        self.gap(cfg.section_gap);
    }

    fn finish(mut self) -> Report {
        self.pages.push(self.page);
        Report {
            title: self.config.title.clone(),
            page_width: self.config.page_width,
            page_height: self.config.page_height,
            pages: self.pages,
        }
    }
}

///
/// Lay out the report for `entries`, in order.
///
/// Each entry renders three sections (gene information, gene function, mutation
/// interpretation) followed by a separator line. Sections whose data is missing render a
/// fixed placeholder line instead.
///
pub fn paginate(entries: &[GeneReportEntry], config: &LayoutConfig) -> Report {
    let mut paginator = Paginator::new(config);
    for entry in entries {
        paginator.entry(entry);
    }
    let report = paginator.finish();
    debug!(
        "Laid out {} gene entries on {} pages",
        entries.len(),
        report.pages.len()
    );
    report
}
