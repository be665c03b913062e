// crates/segmenter-core/src/campaign.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SegError};
use crate::segment::naming::slug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Campaign {
    BanCoppel,
    MonteDePiedad,
}

const BANCOPPEL_ROSTER: &[&str] = &[
    "Natalia Vega",
    "Patricia Salazar",
    "Arturo Cuevas",
    "Itzel Valencia",
    "Luca Oseguera",
    "Nery Espiritu",
    "Manuel Avila",
];

const MONTE_DE_PIEDAD_ROSTER: &[&str] = &[
    "Amairani",
    "Ana Karen",
    "Tania Patricia",
    "Goretti Xaire",
    "Adriana Palacios",
    "Jose Rangel",
];

impl Campaign {
    pub const ALL: [Campaign; 2] = [Campaign::BanCoppel, Campaign::MonteDePiedad];

    pub fn display_name(self) -> &'static str {
        match self {
            Campaign::BanCoppel => "BanCoppel",
            Campaign::MonteDePiedad => "Monte de Piedad",
        }
    }

    pub fn roster(self) -> &'static [&'static str] {
        match self {
            Campaign::BanCoppel => BANCOPPEL_ROSTER,
            Campaign::MonteDePiedad => MONTE_DE_PIEDAD_ROSTER,
        }
    }

    pub fn slug(self) -> String {
        slug(self.display_name())
    }

    /// Validate a selection against the roster, keeping caller order.
    /// Each roster name may be picked at most once.
    pub fn select_agents<I, S>(self, names: I) -> Result<Vec<Agent>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut agents = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            let hit = self
                .roster()
                .iter()
                .find(|r| r.eq_ignore_ascii_case(name))
                .ok_or_else(|| SegError::UnknownAgent {
                    campaign: self.display_name().to_owned(),
                    agent: name.to_owned(),
                })?;
            if agents.iter().any(|a: &Agent| a.name() == *hit) {
                return Err(SegError::DuplicateAgent {
                    agent: (*hit).to_owned(),
                });
            }
            agents.push(Agent::new(*hit));
        }
        if agents.is_empty() {
            return Err(SegError::NoAgentsSelected);
        }
        Ok(agents)
    }
}

impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Campaign {
    type Err = SegError;

    /// Accepts the display name or its slug, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = slug(s.trim());
        Campaign::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| SegError::UnknownCampaign(s.to_owned()))
    }
}

/// Agent display name, e.g. "Natalia Vega".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Agent(String);

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn slug(&self) -> String {
        slug(&self.0)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_name_and_slug() {
        assert_eq!("BanCoppel".parse::<Campaign>().unwrap(), Campaign::BanCoppel);
        assert_eq!(
            "monte_de_piedad".parse::<Campaign>().unwrap(),
            Campaign::MonteDePiedad
        );
        assert_eq!(
            "Monte de Piedad".parse::<Campaign>().unwrap(),
            Campaign::MonteDePiedad
        );
        assert!(matches!(
            "Coppel".parse::<Campaign>(),
            Err(SegError::UnknownCampaign(_))
        ));
    }

    #[test]
    fn selection_keeps_order_and_roster_spelling() {
        let agents = Campaign::MonteDePiedad
            .select_agents(["jose rangel", "Amairani"])
            .unwrap();
        let names: Vec<_> = agents.iter().map(Agent::name).collect();
        assert_eq!(names, ["Jose Rangel", "Amairani"]);
    }

    #[test]
    fn selection_rejects_foreign_and_empty() {
        let err = Campaign::BanCoppel.select_agents(["Jose Rangel"]).unwrap_err();
        assert!(matches!(err, SegError::UnknownAgent { .. }));

        let none: [&str; 0] = [];
        assert!(matches!(
            Campaign::BanCoppel.select_agents(none),
            Err(SegError::NoAgentsSelected)
        ));
    }

    #[test]
    fn selection_rejects_repeated_agent() {
        let err = Campaign::MonteDePiedad
            .select_agents(["Amairani", "amairani"])
            .unwrap_err();
        assert!(matches!(
            err,
            SegError::DuplicateAgent { ref agent } if agent == "Amairani"
        ));

        let err = Campaign::BanCoppel
            .select_agents(["Natalia Vega", "Arturo Cuevas", " natalia vega "])
            .unwrap_err();
        assert!(matches!(err, SegError::DuplicateAgent { .. }));
    }
}
