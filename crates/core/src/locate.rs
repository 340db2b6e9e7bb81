use crate::document::{Block, Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    BodyParagraph(usize),
    TableCell {
        table: usize,
        row: usize,
        col: usize,
    },
}

// Linear scan over body paragraphs; first match wins, None when nothing
// starts with the prefix.
pub fn find_by_prefix(doc: &Document, prefix: &str) -> Option<usize> {
    doc.body_paragraphs()
        .position(|paragraph| paragraph.text().trim().starts_with(prefix))
}

// Scans blocks in document order: body paragraphs and table-cell
// paragraphs both count, first tagged match wins.
pub fn find_by_tag(doc: &Document, tag: &str) -> Option<Located> {
    let mut paragraph_idx = 0usize;
    let mut table_idx = 0usize;
    for block in &doc.blocks {
        match block {
            Block::Paragraph(paragraph) => {
                if paragraph.tag.as_deref() == Some(tag) {
                    return Some(Located::BodyParagraph(paragraph_idx));
                }
                paragraph_idx += 1;
            }
            Block::Table(table) => {
                for (row, cells) in table.rows.iter().enumerate() {
                    for (col, cell) in cells.iter().enumerate() {
                        if cell
                            .paragraphs
                            .iter()
                            .any(|paragraph| paragraph.tag.as_deref() == Some(tag))
                        {
                            return Some(Located::TableCell {
                                table: table_idx,
                                row,
                                col,
                            });
                        }
                    }
                }
                table_idx += 1;
            }
        }
    }
    None
}
