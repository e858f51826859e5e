// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal multi-page table writer on landscape A4 with the Helvetica base font.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
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

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page whose content stream is `content`.
    fn push_page(&mut self, content: Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    fn text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = self.margin;

        content.save_state();
        content.set_stroke_rgb(0.7, 0.7, 0.7);
        for (w, cell) in widths.iter().zip(cells) {
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            Self::text(content, x + 3.0, y + 5.0, size, cell);
            x += w;
        }
        content.restore_state();
    }

    /// Width per column from header and content length, scaled to the page.
    fn col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.2 + 8.0).collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * 5.0 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let available = self.page_w - 2.0 * self.margin;
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    fn page_frame(&self, content: &mut Content, title: &str, subtitle: &str, page: usize) {
        let top = self.page_h - self.margin;
        Self::text(content, self.margin, top, self.title_font_size, title);
        Self::text(content, self.margin, top - 16.0, self.font_size, subtitle);
        Self::text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 20.0,
            self.font_size,
            &format!("Page {page}"),
        );
    }

    /// Multi-page table with title; the header row is repeated on every page.
    /// An empty table still yields one page with the header.
    pub fn write_table(
        &mut self,
        title: &str,
        subtitle: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let widths = self.col_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let first_y = self.page_h - self.margin - 40.0;
        let per_page = (((first_y - self.margin) / self.row_h) as usize).saturating_sub(1).max(1);

        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(per_page).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let mut content = Content::new();
            self.page_frame(&mut content, title, subtitle, idx + 1);

            let mut y = first_y;
            self.fill_band(&mut content, y, table_w, 0.85);
            self.row(&mut content, y, &widths, &header_row, self.header_font_size);

            for (i, r) in chunk.iter().enumerate() {
                y -= self.row_h;
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.95);
                }
                self.row(&mut content, y, &widths, r, self.font_size);
            }

            self.push_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
