pub mod proto {
    include!(concat!(env!("OUT_DIR"), "/formfill.v1.rs"));
}

mod document;
mod error;
mod locate;
mod schema;
mod write;

pub use document::{Block, Cell, Document, Header, Paragraph, Run, Table};
pub use error::{FillError, Result};
pub use locate::{find_by_prefix, find_by_tag, Located};
pub use schema::{resolve_target, FieldSpec, FieldTarget, Schema};
pub use write::{apply_answer, scrub_stale, write_located, AnswerRecord};
