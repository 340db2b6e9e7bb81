use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{FillError, Result};
use crate::locate::{self, Located};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldTarget {
    Cell {
        table: usize,
        row: usize,
        col: usize,
    },
    Paragraph {
        paragraph: usize,
    },
    Tag {
        tag: String,
    },
    Prefix {
        prefix: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub target: FieldTarget,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schema {
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    // Fail-fast check run before any write: names unique, every target
    // resolvable against the loaded document.
    pub fn validate(&self, doc: &Document) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FillError::DuplicateField(field.name.clone()));
            }
            resolve_target(doc, &field.target)
                .map_err(|_| FillError::UnresolvedField(field.name.clone()))?;
        }
        Ok(())
    }

    pub fn resolve(&self, doc: &Document, name: &str) -> Result<Located> {
        let field = self
            .fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| FillError::UnknownField(name.to_string()))?;
        resolve_target(doc, &field.target)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

pub fn resolve_target(doc: &Document, target: &FieldTarget) -> Result<Located> {
    match target {
        FieldTarget::Paragraph { paragraph } => {
            let len = doc.paragraph_count();
            if *paragraph >= len {
                return Err(FillError::ParagraphOutOfRange {
                    index: *paragraph,
                    len,
                });
            }
            Ok(Located::BodyParagraph(*paragraph))
        }
        FieldTarget::Cell { table, row, col } => {
            let table_ref = doc.table(*table)?;
            if table_ref.cell(*row, *col).is_none() {
                return Err(FillError::CellOutOfRange {
                    table: *table,
                    row: *row,
                    col: *col,
                });
            }
            Ok(Located::TableCell {
                table: *table,
                row: *row,
                col: *col,
            })
        }
        FieldTarget::Tag { tag } => {
            locate::find_by_tag(doc, tag).ok_or_else(|| FillError::TagNotFound(tag.clone()))
        }
        FieldTarget::Prefix { prefix } => locate::find_by_prefix(doc, prefix)
            .map(Located::BodyParagraph)
            .ok_or_else(|| FillError::PrefixNotFound(prefix.clone())),
    }
}
