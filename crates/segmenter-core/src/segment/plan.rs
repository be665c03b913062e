// crates/segmenter-core/src/segment/plan.rs
//
// Row-range planning for both policies. Pure index math; no table access.
//
// Capped:  ceil(n_rows / max_rows) chunks, chunk i -> agent slot i % n_agents.
// Equal:   exactly n_agents chunks of ceil(n_rows / n_agents) rows,
//          clipped to n_rows (tail chunks may be short or empty).

use std::ops::Range;

use crate::error::Result;
use crate::policy::Policy;
use crate::validate::validate_run;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// 1-based, global across the run.
    pub index: usize,
    /// Position in the caller's agent list.
    pub agent_slot: usize,
    pub rows: Range<usize>,
}

impl Assignment {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn plan(n_rows: usize, n_agents: usize, policy: Policy) -> Result<Vec<Assignment>> {
    validate_run(n_agents, policy)?;

    let out = match policy {
        Policy::CappedRoundRobin { max_rows } => plan_capped(n_rows, n_agents, max_rows),
        Policy::EqualSplit => plan_equal(n_rows, n_agents),
    };

    tracing::debug!(
        n_rows,
        n_agents,
        %policy,
        segments = out.len(),
        "planned segments"
    );
    Ok(out)
}

fn plan_capped(n_rows: usize, n_agents: usize, max_rows: usize) -> Vec<Assignment> {
    (0..n_rows)
        .step_by(max_rows)
        .enumerate()
        .map(|(i, start)| Assignment {
            index: i + 1,
            agent_slot: i % n_agents,
            rows: start..(start + max_rows).min(n_rows),
        })
        .collect()
}

fn plan_equal(n_rows: usize, n_agents: usize) -> Vec<Assignment> {
    let per = n_rows.div_ceil(n_agents);
    (0..n_agents)
        .map(|i| {
            let start = (i * per).min(n_rows);
            let end = ((i + 1) * per).min(n_rows);
            Assignment {
                index: i + 1,
                agent_slot: i,
                rows: start..end,
            }
        })
        .collect()
}
