use clap::Args;
use segmenter_core::Campaign;

#[derive(Args)]
pub struct CampaignsArgs {
    /// Only list this campaign (display name or slug)
    #[arg(long)]
    pub campaign: Option<String>,
}

pub fn run(args: CampaignsArgs) -> anyhow::Result<()> {
    let list: Vec<Campaign> = match args.campaign.as_deref() {
        Some(name) => vec![name.parse()?],
        None => Campaign::ALL.to_vec(),
    };

    for c in list {
        println!("{} ({})", c.display_name(), c.slug());
        for agent in c.roster() {
            println!("  - {agent}");
        }
    }
    Ok(())
}
