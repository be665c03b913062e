// crates/segmenter-core/src/segment/mod.rs

pub mod naming;
pub mod plan;

use crate::campaign::Agent;
use crate::error::Result;
use crate::policy::Policy;
use crate::table::{csv_io, Table};
use crate::validate::validate_run;

pub use naming::NamingContext;
pub use plan::{plan, Assignment};

/// One agent's contiguous share of the table, ready to be written out.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// 1-based, unique within a run.
    pub index: usize,
    pub agent: Agent,
    pub table: Table,
    pub file_name: String,
}

/// Something the caller can offer as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub label: String,
    pub csv: String,
    pub file_name: String,
}

impl Segment {
    pub fn n_rows(&self) -> usize {
        self.table.n_rows()
    }

    pub fn summary(&self) -> String {
        let (rows, cols) = self.table.shape();
        format!(
            "Segmento {} para {} con {} filas y {} columnas",
            self.index, self.agent, rows, cols
        )
    }

    pub fn label(&self) -> String {
        format!("Descargar segmento {} para {}", self.index, self.agent)
    }

    pub fn to_csv(&self) -> Result<String> {
        csv_io::to_csv(&self.table)
    }

    pub fn to_download(&self) -> Result<Download> {
        Ok(Download {
            label: self.label(),
            csv: self.to_csv()?,
            file_name: self.file_name.clone(),
        })
    }
}

/// Split `table` (already normalized) across `agents` under `policy`.
///
/// Nothing is produced on error: agents and policy are checked first, then
/// the table must have at least one row and one column.
pub fn segment(
    table: &Table,
    agents: &[Agent],
    policy: Policy,
    naming: &NamingContext,
) -> Result<Vec<Segment>> {
    validate_run(agents.len(), policy)?;
    table.ensure_non_empty()?;

    let out: Vec<Segment> = plan(table.n_rows(), agents.len(), policy)?
        .into_iter()
        .map(|a| {
            let agent = agents[a.agent_slot].clone();
            Segment {
                index: a.index,
                file_name: naming.file_name(&agent, a.index),
                table: table.slice(a.rows),
                agent,
            }
        })
        .collect();

    Ok(out)
}
