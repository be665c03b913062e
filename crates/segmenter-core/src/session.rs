// crates/segmenter-core/src/session.rs
//
// Per-session state: the loaded (normalized) table, the agent selection and
// the segments of the latest run. Each run replaces the previous segments.

use chrono::NaiveDate;

use crate::campaign::{Agent, Campaign};
use crate::error::{Result, SegError};
use crate::manifest::{run_id_hex, Manifest};
use crate::policy::Policy;
use crate::repr::text_norm::normalize_table;
use crate::segment::{segment, Download, NamingContext, Segment};
use crate::table::Table;

#[derive(Debug)]
pub struct Session {
    campaign: Campaign,
    agents: Vec<Agent>,
    table: Option<Table>,
    segments: Vec<Segment>,
    /// Policy and run id of the latest successful run.
    last_run: Option<(Policy, String)>,
}

impl Session {
    pub fn new(campaign: Campaign) -> Self {
        Self {
            campaign,
            agents: Vec::new(),
            table: None,
            segments: Vec::new(),
            last_run: None,
        }
    }

    pub fn campaign(&self) -> Campaign {
        self.campaign
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Validate, normalize and keep a freshly loaded table.
    /// Segments from an earlier table are dropped.
    pub fn load_table(&mut self, table: Table) -> Result<&Table> {
        table.ensure_non_empty()?;
        self.segments.clear();
        self.last_run = None;
        let table = normalize_table(table);
        tracing::info!(
            rows = table.n_rows(),
            cols = table.n_cols(),
            "table loaded"
        );
        Ok(&*self.table.insert(table))
    }

    pub fn select_agents<I, S>(&mut self, names: I) -> Result<&[Agent]>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.agents = self.campaign.select_agents(names)?;
        Ok(self.agents.as_slice())
    }

    /// Run one segmentation action. The previous segment list is discarded
    /// before running, so a failed run leaves the session with none.
    pub fn run(&mut self, policy: Policy, date: NaiveDate) -> Result<&[Segment]> {
        self.segments.clear();
        self.last_run = None;
        let table = self.table.as_ref().ok_or(SegError::EmptyTable)?;
        let naming = NamingContext::new(self.campaign, date);

        let segments = segment(table, &self.agents, policy, &naming)?;
        let run_id = run_id_hex(table, policy, &self.agents)?;
        self.segments = segments;
        self.last_run = Some((policy, run_id));
        tracing::info!(
            campaign = %self.campaign,
            %policy,
            agents = self.agents.len(),
            segments = self.segments.len(),
            "segmentation run"
        );
        Ok(self.segments.as_slice())
    }

    pub fn downloads(&self) -> Result<Vec<Download>> {
        self.segments.iter().map(Segment::to_download).collect()
    }

    /// Manifest of the latest successful run, `None` before any run.
    pub fn manifest(&self) -> Result<Option<Manifest>> {
        let Some((policy, run_id)) = self.last_run.as_ref() else {
            return Ok(None);
        };
        Manifest::build(run_id.clone(), *policy, &self.segments).map(Some)
    }
}
