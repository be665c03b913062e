// crates/segmenter-cli/src/cmd/split.rs

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use segmenter_core::policy::DEFAULT_MAX_ROWS;
use segmenter_core::{Campaign, Policy, Session};

use crate::io::{segment_files, table_file};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Chunks of at most --max-rows rows, dealt to agents in turn.
    Capped,
    /// One equal share per selected agent.
    Equal,
}

#[derive(Args, Clone, Debug)]
pub struct SplitArgs {
    /// Campaign (display name or slug), e.g. "Monte de Piedad" or monte_de_piedad
    #[arg(long)]
    pub campaign: String,

    /// Agent to include; repeat in assignment order
    #[arg(long = "agent", required = true)]
    pub agents: Vec<String>,

    /// Input CSV file
    #[arg(long)]
    pub r#in: PathBuf,

    /// Directory receiving the segment files
    #[arg(long, env = "SEGMENTER_OUT_DIR", default_value = "segmentos")]
    pub out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = PolicyKind::Capped)]
    pub policy: PolicyKind,

    /// Max rows per segment (capped policy only)
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Date used in file names (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Plan and report, but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Skip manifest.csv
    #[arg(long)]
    pub no_manifest: bool,
}

impl SplitArgs {
    pub fn policy(&self) -> anyhow::Result<Policy> {
        Ok(match self.policy {
            PolicyKind::Capped => Policy::capped(self.max_rows)?,
            PolicyKind::Equal => Policy::EqualSplit,
        })
    }
}

#[derive(Debug)]
pub struct SplitReport {
    pub summaries: Vec<String>,
    pub files: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub run_id: Option<String>,
    pub total_rows: usize,
}

/// Load, normalize, segment and (unless dry-run) write every segment.
pub fn execute(args: &SplitArgs, today: NaiveDate) -> anyhow::Result<SplitReport> {
    let campaign: Campaign = args.campaign.parse()?;
    let policy = args.policy()?;

    let mut session = Session::new(campaign);
    session.select_agents(&args.agents)?;
    session.load_table(table_file::load_table(&args.r#in)?)?;
    session.run(policy, args.date.unwrap_or(today))?;

    let summaries: Vec<String> = session.segments().iter().map(|s| s.summary()).collect();
    let downloads = session.downloads()?;
    let manifest = session.manifest()?;
    let total_rows = session.segments().iter().map(|s| s.n_rows()).sum();
    let run_id = manifest.as_ref().map(|m| m.run_id.clone());

    if args.dry_run {
        return Ok(SplitReport {
            summaries,
            files: Vec::new(),
            manifest: None,
            run_id,
            total_rows,
        });
    }

    let files = segment_files::write_downloads(&args.out_dir, &downloads)?;
    let manifest = match manifest {
        Some(m) if !args.no_manifest => Some(segment_files::write_manifest(&args.out_dir, &m)?),
        _ => None,
    };

    Ok(SplitReport {
        summaries,
        files,
        manifest,
        run_id,
        total_rows,
    })
}

pub fn run(args: SplitArgs) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let rep = execute(&args, today)?;

    for line in &rep.summaries {
        println!("{line}");
    }
    for p in &rep.files {
        println!("{}", p.display());
    }

    eprintln!(
        "split ok: campaign={} policy={} segments={} rows={} out={} dry_run={} run_id={}",
        args.campaign,
        args.policy()?,
        rep.summaries.len(),
        rep.total_rows,
        args.out_dir.display(),
        args.dry_run,
        rep.run_id.as_deref().unwrap_or("-"),
    );
    Ok(())
}
