use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("prost encode error: {0}")]
    ProtoEncode(#[from] prost::EncodeError),
    #[error("prost decode error: {0}")]
    ProtoDecode(#[from] prost::DecodeError),
    #[error("invalid document: {0}")]
    InvalidDocument(&'static str),
    #[error("paragraph index {index} out of range (document has {len} body paragraphs)")]
    ParagraphOutOfRange { index: usize, len: usize },
    #[error("table index {index} out of range (document has {len} tables)")]
    TableOutOfRange { index: usize, len: usize },
    #[error("cell ({row}, {col}) out of range in table {table}")]
    CellOutOfRange {
        table: usize,
        row: usize,
        col: usize,
    },
    #[error("field '{0}' does not resolve against the document")]
    UnresolvedField(String),
    #[error("field '{0}' declared more than once in the schema")]
    DuplicateField(String),
    #[error("answer targets unknown field '{0}'")]
    UnknownField(String),
    #[error("no paragraph carries tag '{0}'")]
    TagNotFound(String),
    #[error("no paragraph starts with '{0}'")]
    PrefixNotFound(String),
    #[error("output path equals the template path: {0}")]
    OutputIsTemplate(String),
}

pub type Result<T> = std::result::Result<T, FillError>;
