// crates/segmenter-cli/src/cmd/inspect.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use segmenter_core::repr::text_norm::normalize_table;
use segmenter_core::table::csv_io;

use crate::io::table_file;

#[derive(Args)]
pub struct InspectArgs {
    /// Input CSV file
    #[arg(long)]
    pub r#in: PathBuf,

    /// Preview rows to print
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let table = table_file::load_table(&args.r#in)?;
    table.ensure_non_empty()?;
    let table = normalize_table(table);

    let (rows, cols) = table.shape();
    println!("El archivo tiene {rows} filas (sin contar el encabezado) y {cols} columnas.");
    println!();

    let preview = csv_io::to_csv(&table.head(args.rows)).context("render preview")?;
    print!("{preview}");
    Ok(())
}
