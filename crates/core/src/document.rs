use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use prost::Message;
use serde::{Deserialize, Serialize};

use crate::error::{FillError, Result};
use crate::proto;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub title: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: 1,
            title: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::plain(text)],
            tag: None,
        }
    }

    pub fn tagged(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::plain(text)],
            tag: Some(tag.into()),
        }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    // Replaces all runs with one plain run; the tag survives so the
    // paragraph stays addressable by schema after a rewrite.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.runs = vec![Run::plain(text)];
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::plain(text)],
        }
    }

    pub fn text(&self) -> String {
        let lines: Vec<String> = self.paragraphs.iter().map(|p| p.text()).collect();
        lines.join("\n")
    }

    // Clears every paragraph in the cell and writes the text into the
    // first one; the cell keeps its paragraph count.
    pub fn set_text(&mut self, text: impl Into<String>) {
        for paragraph in &mut self.paragraphs {
            paragraph.clear();
        }
        match self.paragraphs.first_mut() {
            Some(first) => first.set_text(text),
            None => self.paragraphs.push(Paragraph::plain(text)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::default()).collect())
                .collect(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|cells| cells.get_mut(col))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map(|cells| cells.len()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            blocks: Vec::new(),
        }
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn push_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    // The body-paragraph sequence excludes paragraphs nested in table
    // cells; positional targets index into this sequence.
    pub fn body_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    pub fn body_paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    pub fn paragraph_count(&self) -> usize {
        self.body_paragraphs().count()
    }

    pub fn body_paragraph(&self, index: usize) -> Result<&Paragraph> {
        let len = self.paragraph_count();
        self.body_paragraphs()
            .nth(index)
            .ok_or(FillError::ParagraphOutOfRange { index, len })
    }

    pub fn body_paragraph_mut(&mut self, index: usize) -> Result<&mut Paragraph> {
        let len = self.paragraph_count();
        self.body_paragraphs_mut()
            .nth(index)
            .ok_or(FillError::ParagraphOutOfRange { index, len })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    pub fn table(&self, index: usize) -> Result<&Table> {
        let len = self.table_count();
        self.tables()
            .nth(index)
            .ok_or(FillError::TableOutOfRange { index, len })
    }

    pub fn table_mut(&mut self, index: usize) -> Result<&mut Table> {
        let len = self.table_count();
        self.tables_mut()
            .nth(index)
            .ok_or(FillError::TableOutOfRange { index, len })
    }

    pub fn to_proto(&self) -> proto::Document {
        let blocks = self
            .blocks
            .iter()
            .map(|block| proto::Block {
                kind: Some(match block {
                    Block::Paragraph(paragraph) => {
                        proto::block::Kind::Paragraph(paragraph_to_proto(paragraph))
                    }
                    Block::Table(table) => proto::block::Kind::Table(proto::Table {
                        rows: table
                            .rows
                            .iter()
                            .map(|cells| proto::TableRow {
                                cells: cells
                                    .iter()
                                    .map(|cell| proto::Cell {
                                        paragraphs: cell
                                            .paragraphs
                                            .iter()
                                            .map(paragraph_to_proto)
                                            .collect(),
                                    })
                                    .collect(),
                            })
                            .collect(),
                    }),
                }),
            })
            .collect();

        proto::Document {
            header: Some(proto::Header {
                version: self.header.version,
                title: self.header.title.clone(),
            }),
            blocks,
        }
    }

    pub fn from_proto(doc: proto::Document) -> Result<Self> {
        let header = doc
            .header
            .map(|h| Header {
                version: h.version,
                title: h.title,
            })
            .unwrap_or_default();

        let mut blocks = Vec::with_capacity(doc.blocks.len());
        for block in doc.blocks {
            let kind = block
                .kind
                .ok_or(FillError::InvalidDocument("block without kind"))?;
            blocks.push(match kind {
                proto::block::Kind::Paragraph(paragraph) => {
                    Block::Paragraph(paragraph_from_proto(paragraph))
                }
                proto::block::Kind::Table(table) => Block::Table(Table {
                    rows: table
                        .rows
                        .into_iter()
                        .map(|row| {
                            row.cells
                                .into_iter()
                                .map(|cell| Cell {
                                    paragraphs: cell
                                        .paragraphs
                                        .into_iter()
                                        .map(paragraph_from_proto)
                                        .collect(),
                                })
                                .collect()
                        })
                        .collect(),
                }),
            });
        }

        Ok(Self { header, blocks })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let proto = self.to_proto();
        let mut buf = Vec::with_capacity(proto.encoded_len());
        proto.encode(&mut buf)?;
        let mut encoder = zstd::stream::Encoder::new(Vec::new(), 3)?;
        encoder.write_all(&buf)?;
        let data = encoder.finish()?;
        Ok(data)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut decoder = zstd::stream::Decoder::new(bytes)?;
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf)?;
        let proto = proto::Document::decode(&*buf)?;
        Self::from_proto(proto)
    }

    pub fn save_bin<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    pub fn load_bin<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let doc: Document = serde_json::from_reader(file)?;
        Ok(doc)
    }
}

fn paragraph_to_proto(paragraph: &Paragraph) -> proto::Paragraph {
    proto::Paragraph {
        runs: paragraph
            .runs
            .iter()
            .map(|run| proto::Run {
                text: run.text.clone(),
                bold: run.bold,
                italic: run.italic,
            })
            .collect(),
        tag: paragraph.tag.clone().unwrap_or_default(),
    }
}

fn paragraph_from_proto(paragraph: proto::Paragraph) -> Paragraph {
    Paragraph {
        runs: paragraph
            .runs
            .into_iter()
            .map(|run| Run {
                text: run.text,
                bold: run.bold,
                italic: run.italic,
            })
            .collect(),
        tag: if paragraph.tag.is_empty() {
            None
        } else {
            Some(paragraph.tag)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_text_concatenates_runs() {
        let paragraph = Paragraph {
            runs: vec![
                Run::plain("Name: "),
                Run {
                    text: "bold part".to_string(),
                    bold: true,
                    italic: false,
                },
            ],
            tag: None,
        };
        assert_eq!(paragraph.text(), "Name: bold part");
    }

    #[test]
    fn set_text_flattens_runs_and_keeps_tag() {
        let mut paragraph = Paragraph::tagged("old", "name");
        paragraph.runs.push(Run {
            text: " extra".to_string(),
            bold: true,
            italic: true,
        });
        paragraph.set_text("new");
        assert_eq!(paragraph.runs.len(), 1);
        assert_eq!(paragraph.text(), "new");
        assert!(!paragraph.runs[0].bold);
        assert_eq!(paragraph.tag.as_deref(), Some("name"));
    }

    #[test]
    fn cell_set_text_clears_every_paragraph() {
        let mut cell = Cell {
            paragraphs: vec![Paragraph::plain("one"), Paragraph::plain("two")],
        };
        cell.set_text("answer");
        assert_eq!(cell.paragraphs.len(), 2);
        assert_eq!(cell.paragraphs[0].text(), "answer");
        assert!(cell.paragraphs[1].is_empty());
        assert_eq!(cell.text(), "answer\n");
    }

    #[test]
    fn cell_set_text_on_empty_cell_creates_paragraph() {
        let mut cell = Cell::default();
        cell.set_text("answer");
        assert_eq!(cell.text(), "answer");
    }

    #[test]
    fn body_paragraphs_skip_table_content() {
        let mut doc = Document::default();
        doc.push_paragraph(Paragraph::plain("first"));
        let mut table = Table::with_dims(1, 1);
        table.cell_mut(0, 0).unwrap().set_text("inside cell");
        doc.push_table(table);
        doc.push_paragraph(Paragraph::plain("second"));

        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
        assert_eq!(doc.body_paragraph(1).unwrap().text(), "second");
    }

    #[test]
    fn out_of_range_lookups_carry_lengths() {
        let mut doc = Document::default();
        doc.push_paragraph(Paragraph::plain("only"));
        match doc.body_paragraph(4) {
            Err(FillError::ParagraphOutOfRange { index: 4, len: 1 }) => {}
            other => panic!("unexpected: {other:?}"),
        }
        match doc.table(0) {
            Err(FillError::TableOutOfRange { index: 0, len: 0 }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut doc = Document::new(Header {
            version: 1,
            title: "worksheet".to_string(),
        });
        doc.push_paragraph(Paragraph::tagged("Name:", "name"));
        doc.push_table(Table::with_dims(2, 2));
        let first = doc.to_bytes().unwrap();
        let second = doc.to_bytes().unwrap();
        assert_eq!(first, second);
    }
}
