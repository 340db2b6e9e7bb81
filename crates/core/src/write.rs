use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{FillError, Result};
use crate::locate::Located;
use crate::schema::Schema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerRecord {
    pub field: String,
    pub text: String,
}

pub fn write_located(doc: &mut Document, located: Located, text: &str) -> Result<()> {
    match located {
        Located::BodyParagraph(index) => {
            doc.body_paragraph_mut(index)?.set_text(text);
        }
        Located::TableCell { table, row, col } => {
            let cell = doc
                .table_mut(table)?
                .cell_mut(row, col)
                .ok_or(FillError::CellOutOfRange { table, row, col })?;
            cell.set_text(text);
        }
    }
    Ok(())
}

pub fn apply_answer(doc: &mut Document, schema: &Schema, answer: &AnswerRecord) -> Result<Located> {
    let located = schema.resolve(doc, &answer.field)?;
    write_located(doc, located, &answer.text)?;
    Ok(located)
}

// Migration step for templates that carry answers left outside their
// boxes by an earlier fill: clears body paragraphs whose trimmed text
// exactly equals one of the stale texts. Cleared paragraphs no longer
// match, so a second pass is a no-op.
pub fn scrub_stale(doc: &mut Document, stale_texts: &[String]) -> usize {
    let mut cleared = 0;
    for paragraph in doc.body_paragraphs_mut() {
        let text = paragraph.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        if stale_texts.iter().any(|stale| stale.trim() == trimmed) {
            paragraph.clear();
            cleared += 1;
        }
    }
    cleared
}
