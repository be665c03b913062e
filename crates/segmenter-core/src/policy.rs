// crates/segmenter-core/src/policy.rs

use std::fmt;

use crate::error::{Result, SegError};

/// Default cap used by the capped policy when the caller gives none.
pub const DEFAULT_MAX_ROWS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Fixed-size chunks of `max_rows`, dealt to agents round-robin.
    CappedRoundRobin { max_rows: usize },
    /// One chunk per agent, `ceil(rows / agents)` rows each.
    EqualSplit,
}

impl Policy {
    pub fn capped(max_rows: usize) -> Result<Self> {
        if max_rows == 0 {
            return Err(SegError::InvalidPolicyParameter(max_rows));
        }
        Ok(Policy::CappedRoundRobin { max_rows })
    }

    pub fn label(self) -> &'static str {
        match self {
            Policy::CappedRoundRobin { .. } => "capped",
            Policy::EqualSplit => "equal",
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::CappedRoundRobin {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::CappedRoundRobin { max_rows } => write!(f, "capped(max_rows={max_rows})"),
            Policy::EqualSplit => f.write_str("equal"),
        }
    }
}
