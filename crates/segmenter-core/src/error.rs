// crates/segmenter-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegError>;

#[derive(Debug, Error)]
pub enum SegError {
    #[error("table is empty or has no columns")]
    EmptyTable,

    #[error("no agents selected")]
    NoAgentsSelected,

    #[error("invalid policy parameter: max rows per segment must be >= 1 (got {0})")]
    InvalidPolicyParameter(usize),

    #[error("unknown campaign: {0}")]
    UnknownCampaign(String),

    #[error("agent {agent:?} is not on the {campaign} roster")]
    UnknownAgent { campaign: String, agent: String },

    #[error("agent {agent:?} selected more than once")]
    DuplicateAgent { agent: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
