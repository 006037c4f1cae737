// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 36.0;

const LINE_H: f32 = 12.0;
const HEADER_H: f32 = 20.0;

const BODY_SIZE: f32 = 9.0;
const HEADER_SIZE: f32 = 10.0;
const META_SIZE: f32 = 10.0;
const SUBTITLE_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 18.0;
const SECTION_SIZE: f32 = 14.0;

/// Fixed column widths of the jobs table (Fecha, Descripción, Duración).
const TABLE_COL_WIDTHS: [f32; 3] = [80.0, 300.0, 80.0];

/// Report accent color (#045C7C).
const PRIMARY: (f32, f32, f32) = (0.016, 0.361, 0.486);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const WHITE: (f32, f32, f32) = (1.0, 1.0, 1.0);
const GRID: (f32, f32, f32) = (0.65, 0.65, 0.65);
const BODY_BG: (f32, f32, f32) = (0.96, 0.96, 0.96);

#[derive(Clone, Copy)]
enum FontKind {
    Regular,
    Bold,
    Oblique,
}

impl FontKind {
    fn name(self) -> Name<'static> {
        match self {
            FontKind::Regular => Name(b"F1"),
            FontKind::Bold => Name(b"F2"),
            FontKind::Oblique => Name(b"F3"),
        }
    }
}

/// One pre-formatted table row; the description is already wrapped into
/// cell-width lines.
pub(crate) struct JobTableRow {
    pub date: String,
    pub desc: Vec<String>,
    pub duration: String,
}

/// Thin stateful wrapper over pdf-writer: tracks object ids, the open
/// page's content stream, and a top-down layout cursor.
pub(crate) struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,
    y: f32,

    next_id: i32,
    font_regular: Ref,
    font_bold: Ref,
    font_oblique: Ref,
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_regular = Ref::new(3);
        let font_bold = Ref::new(4);
        let font_oblique = Ref::new(5);
        let next_id = 6;

        // Base-14 fonts; WinAnsi so the Spanish labels encode correctly
        pdf.type1_font(font_regular)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(font_bold)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(font_oblique)
            .base_font(Name(b"Helvetica-Oblique"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,
            y: PAGE_H - MARGIN,

            next_id,
            font_regular,
            font_bold,
            font_oblique,
        }
    }

    /// Generate a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content object, reset the cursor.
    fn start_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_regular);
        fonts.pair(Name(b"F2"), self.font_bold);
        fonts.pair(Name(b"F3"), self.font_oblique);
        drop(fonts);
        drop(resources);
        drop(page);

        self.current_content_id = Some(content_id);
        self.content = Some(Content::new());
        self.y = PAGE_H - MARGIN;

        let footer = format!("Página {}", self.page_refs.len());
        self.text_at(
            FontKind::Regular,
            BODY_SIZE,
            BLACK,
            PAGE_W - MARGIN - text_width(&footer, BODY_SIZE),
            MARGIN - 18.0,
            &footer,
        );
    }

    /// Write out the current page's content stream.
    fn finalize_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Guarantee `needed` points of vertical room, breaking the page if
    /// necessary.
    fn ensure_space(&mut self, needed: f32) {
        if self.content.is_none() {
            self.start_page();
        } else if self.y - needed < MARGIN {
            self.finalize_page();
            self.start_page();
        }
    }

    fn text_at(&mut self, font: FontKind, size: f32, color: (f32, f32, f32), x: f32, y: f32, s: &str) {
        if let Some(c) = self.content.as_mut() {
            draw_text(c, font, size, color, x, y, s);
        }
    }

    fn fill_rect(&mut self, color: (f32, f32, f32), x: f32, y: f32, w: f32, h: f32) {
        if let Some(c) = self.content.as_mut() {
            c.save_state();
            c.set_fill_rgb(color.0, color.1, color.2);
            c.rect(x, y, w, h);
            c.fill_nonzero();
            c.restore_state();
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if let Some(c) = self.content.as_mut() {
            c.save_state();
            c.set_stroke_rgb(GRID.0, GRID.1, GRID.2);
            c.rect(x, y, w, h);
            c.stroke();
            c.restore_state();
        }
    }

    /// Centered cover block: title, subtitle, author, download stamp.
    pub fn cover(&mut self, title: &str, subtitle: &str, author: &str, stamp_line: &str) {
        self.ensure_space(110.0);

        self.y -= TITLE_SIZE;
        self.text_at(
            FontKind::Bold,
            TITLE_SIZE,
            PRIMARY,
            centered_x(title, TITLE_SIZE),
            self.y,
            title,
        );

        self.y -= 20.0;
        self.text_at(
            FontKind::Oblique,
            SUBTITLE_SIZE,
            BLACK,
            centered_x(subtitle, SUBTITLE_SIZE),
            self.y,
            subtitle,
        );

        self.y -= 16.0;
        self.text_at(
            FontKind::Regular,
            META_SIZE,
            BLACK,
            centered_x(author, META_SIZE),
            self.y,
            author,
        );

        self.y -= 14.0;
        self.text_at(
            FontKind::Regular,
            META_SIZE,
            BLACK,
            centered_x(stamp_line, META_SIZE),
            self.y,
            stamp_line,
        );

        self.y -= 24.0;
    }

    /// Colored header band; repeated at the top of every table page.
    fn table_header(&mut self, headers: &[&str; 3]) {
        let top = self.y;
        let x0 = MARGIN;
        let total_w: f32 = TABLE_COL_WIDTHS.iter().sum();

        self.fill_rect(PRIMARY, x0, top - HEADER_H, total_w, HEADER_H);

        let mut x = x0;
        for w in TABLE_COL_WIDTHS {
            self.stroke_rect(x, top - HEADER_H, w, HEADER_H);
            x += w;
        }

        let base = top - 14.0;
        self.text_at(FontKind::Bold, HEADER_SIZE, WHITE, x0 + 4.0, base, headers[0]);
        self.text_at(
            FontKind::Bold,
            HEADER_SIZE,
            WHITE,
            x0 + TABLE_COL_WIDTHS[0] + 4.0,
            base,
            headers[1],
        );
        self.text_at(
            FontKind::Bold,
            HEADER_SIZE,
            WHITE,
            x0 + total_w - 4.0 - text_width(headers[2], HEADER_SIZE),
            base,
            headers[2],
        );

        self.y = top - HEADER_H;
    }

    /// Multi-page jobs table with wrapped description cells. With no rows
    /// only the header band is drawn.
    pub fn jobs_table(&mut self, headers: &[&str; 3], rows: &[JobTableRow]) {
        self.ensure_space(HEADER_H + LINE_H + 10.0);
        self.table_header(headers);

        let x0 = MARGIN;
        let widths = TABLE_COL_WIDTHS;
        let total_w: f32 = widths.iter().sum();

        for row in rows {
            let lines = row.desc.len().max(1);
            let row_h = lines as f32 * LINE_H + 8.0;

            if self.y - row_h < MARGIN {
                self.finalize_page();
                self.start_page();
                self.table_header(headers);
            }

            let top = self.y;

            self.fill_rect(BODY_BG, x0, top - row_h, total_w, row_h);
            let mut x = x0;
            for w in widths {
                self.stroke_rect(x, top - row_h, w, row_h);
                x += w;
            }

            let base = top - 13.0;
            self.text_at(FontKind::Regular, BODY_SIZE, BLACK, x0 + 4.0, base, &row.date);
            for (i, line) in row.desc.iter().enumerate() {
                self.text_at(
                    FontKind::Regular,
                    BODY_SIZE,
                    BLACK,
                    x0 + widths[0] + 4.0,
                    base - i as f32 * LINE_H,
                    line,
                );
            }
            self.text_at(
                FontKind::Regular,
                BODY_SIZE,
                BLACK,
                x0 + total_w - 4.0 - text_width(&row.duration, BODY_SIZE),
                base,
                &row.duration,
            );

            self.y = top - row_h;
        }
    }

    /// Section heading in the accent color.
    pub fn section_title(&mut self, text: &str) {
        self.ensure_space(44.0);
        self.y -= 16.0 + SECTION_SIZE;
        self.text_at(FontKind::Bold, SECTION_SIZE, PRIMARY, MARGIN, self.y, text);
        self.y -= 8.0;
    }

    /// "Label: value" line with a bold label.
    pub fn totals_line(&mut self, label: &str, value: &str) {
        self.ensure_space(LINE_H + 4.0);
        self.y -= LINE_H;
        self.text_at(FontKind::Bold, META_SIZE, BLACK, MARGIN, self.y, label);
        self.text_at(
            FontKind::Regular,
            META_SIZE,
            BLACK,
            MARGIN + text_width(label, META_SIZE) + 6.0,
            self.y,
            value,
        );
        self.y -= 2.0;
    }

    /// Close the open page, build Catalog + Pages, and return the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.content.is_none() {
            self.start_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        self.pdf.finish()
    }
}

/// Average-width heuristic for Helvetica; good enough for centering and
/// right-alignment of short cells.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

fn centered_x(text: &str, size: f32) -> f32 {
    ((PAGE_W - text_width(text, size)) / 2.0).max(MARGIN)
}

fn draw_text(
    content: &mut Content,
    font: FontKind,
    size: f32,
    color: (f32, f32, f32),
    x: f32,
    y: f32,
    text: &str,
) {
    let bytes = encode_win_ansi(text);
    content.set_fill_rgb(color.0, color.1, color.2);
    content.begin_text();
    content.set_font(font.name(), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
}

/// Map text to WinAnsi bytes. Latin-1 covers the Spanish alphabet; the
/// few typographic characters the reports use live in the 0x80–0x9F gap.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '–' => 0x96,
            '—' => 0x97,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ansi_covers_spanish_text() {
        assert_eq!(encode_win_ansi("Descripción"), b"Descripci\xf3n".to_vec());
        assert_eq!(encode_win_ansi("Óptica"), b"\xd3ptica".to_vec());
        assert_eq!(encode_win_ansi("– 2024"), b"\x96 2024".to_vec());
    }

    #[test]
    fn unmappable_chars_degrade_to_question_mark() {
        assert_eq!(encode_win_ansi("日"), b"?".to_vec());
    }

    #[test]
    fn empty_manager_still_yields_a_valid_header() {
        let bytes = PdfManager::new().finish();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
