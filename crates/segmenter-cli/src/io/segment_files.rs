// crates/segmenter-cli/src/io/segment_files.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use segmenter_core::manifest::{Manifest, MANIFEST_FILE};
use segmenter_core::Download;
use tempfile::NamedTempFile;

/// Write `text` to `dir/name` through a temp file in the same directory,
/// so a partially written file never appears under the final name.
pub fn write_text_atomic(dir: &Path, name: &str, text: &str) -> anyhow::Result<PathBuf> {
    let final_path = dir.join(name);

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("write {}", final_path.display()))?;
    tmp.flush()
        .with_context(|| format!("flush {}", final_path.display()))?;
    tmp.persist(&final_path)
        .map_err(|e| e.error)
        .with_context(|| format!("persist {}", final_path.display()))?;

    Ok(final_path)
}

pub fn write_downloads(dir: &Path, downloads: &[Download]) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create out dir {}", dir.display()))?;

    let mut out = Vec::with_capacity(downloads.len());
    for d in downloads {
        let p = write_text_atomic(dir, &d.file_name, &d.csv)?;
        tracing::debug!(path = %p.display(), bytes = d.csv.len(), "wrote segment");
        out.push(p);
    }
    Ok(out)
}

pub fn write_manifest(dir: &Path, manifest: &Manifest) -> anyhow::Result<PathBuf> {
    let text = manifest.to_csv().context("serialize manifest")?;
    write_text_atomic(dir, MANIFEST_FILE, &text)
}
