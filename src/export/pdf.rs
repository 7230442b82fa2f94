//! Minimal paginated table PDF built directly with `pdf-writer`: manual
//! object refs, one content stream per page, Helvetica only. Landscape A4,
//! because metric rows carry many columns.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 48.0;
const ROW_H: f32 = 18.0;

const BODY_SIZE: f32 = 9.0;
const HEADER_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;

pub struct PdfReport {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfReport {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a new page and hand back its content stream builder together
    /// with the stream id to finish it under.
    fn open_page(&mut self) -> (Content, Ref) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        (Content::new(), content_id)
    }

    fn close_page(&mut self, content: Content, content_id: Ref) {
        self.pdf.stream(content_id, &content.finish());
    }

    fn text(content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(s.as_bytes()));
        content.end_text();
    }

    fn fill_band(content: &mut Content, x: f32, y: f32, w: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(x, y, w, ROW_H);
        content.fill_nonzero();
        content.restore_state();
    }

    fn row(content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = MARGIN;
        for (cell, w) in cells.iter().zip(widths) {
            Self::text(content, x + 3.0, y + 5.0, size, cell);
            content.save_state();
            content.set_stroke_rgb(0.7, 0.7, 0.7);
            content.rect(x, y, *w, ROW_H);
            content.stroke();
            content.restore_state();
            x += w;
        }
    }

    /// Column widths proportional to header/content length, scaled to fit
    /// the printable width.
    fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len().max(4) as f32 * 6.0).collect();
        for r in rows {
            for (i, cell) in r.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len() as f32 * 5.6);
                }
            }
        }

        let printable = PAGE_W - 2.0 * MARGIN;
        let total: f32 = widths.iter().sum();
        if total > printable && total > 0.0 {
            let scale = printable / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    /// Append the whole table, breaking pages as needed. An empty row set
    /// still yields one page with the title and header row.
    pub fn add_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = Self::column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_cells: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_no = 1;

        loop {
            let (mut content, content_id) = self.open_page();

            Self::text(&mut content, MARGIN, PAGE_H - MARGIN + 14.0, TITLE_SIZE, title);
            let footer = format!("Page {page_no} - {} rows total", rows.len());
            Self::text(&mut content, MARGIN, MARGIN - 30.0, BODY_SIZE, &footer);

            let mut y = PAGE_H - MARGIN - 26.0;

            Self::fill_band(&mut content, MARGIN, y, table_w, 0.86);
            Self::row(&mut content, y, &widths, &header_cells, HEADER_SIZE);
            y -= ROW_H;

            let mut consumed = 0;
            for (i, r) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }
                if i % 2 == 1 {
                    Self::fill_band(&mut content, MARGIN, y, table_w, 0.96);
                }
                Self::row(&mut content, y, &widths, r, BODY_SIZE);
                y -= ROW_H;
                consumed += 1;
            }

            self.close_page(content, content_id);
            remaining = &remaining[consumed..];
            page_no += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
