// crates/segmenter-core/src/segment/naming.rs
//
// Output names: {YYYY_MM_DD}_detonaciones_{campaign_slug}_{agent_slug}_s{index}

use chrono::NaiveDate;

use crate::campaign::{Agent, Campaign};

pub const FILE_EXT: &str = "csv";

/// Lower-case, spaces to underscores.
pub fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "_")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamingContext {
    pub campaign: Campaign,
    /// Date the segmentation ran, not a date taken from the rows.
    pub date: NaiveDate,
}

impl NamingContext {
    pub fn new(campaign: Campaign, date: NaiveDate) -> Self {
        Self { campaign, date }
    }

    pub fn file_stem(&self, agent: &Agent, index: usize) -> String {
        file_stem(self.date, self.campaign.display_name(), agent.name(), index)
    }

    pub fn file_name(&self, agent: &Agent, index: usize) -> String {
        format!("{}.{FILE_EXT}", self.file_stem(agent, index))
    }
}

pub fn file_stem(date: NaiveDate, campaign: &str, agent: &str, index: usize) -> String {
    format!(
        "{}_detonaciones_{}_{}_s{}",
        date.format("%Y_%m_%d"),
        slug(campaign),
        slug(agent),
        index
    )
}
