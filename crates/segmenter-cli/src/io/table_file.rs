// crates/segmenter-cli/src/io/table_file.rs
//
// Load a lead list from disk. UTF-8 is tried first; anything that is not valid
// UTF-8 is read as Latin-1, which accepts every byte sequence.

use std::path::Path;

use anyhow::Context;
use segmenter_core::table::csv_io;
use segmenter_core::Table;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Decode raw file bytes, returning the encoding that was used.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(s) => (s.to_owned(), TextEncoding::Utf8),
        // ISO-8859-1 code points are the byte values.
        Err(_) => (body.iter().map(|&b| char::from(b)).collect(), TextEncoding::Latin1),
    }
}

pub fn load_table(path: &Path) -> anyhow::Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if matches!(ext.as_deref(), Some("xlsx" | "xls")) {
        anyhow::bail!(
            "{}: spreadsheet input is not supported, export it as CSV",
            path.display()
        );
    }

    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        anyhow::bail!("{}: file is empty", path.display());
    }

    let (text, enc) = decode_text(&bytes);
    tracing::debug!(path = %path.display(), encoding = ?enc, bytes = bytes.len(), "decoded input");

    let table =
        csv_io::from_csv_str(&text).with_context(|| format!("parse csv {}", path.display()))?;
    if table.n_cols() == 0 {
        anyhow::bail!("{}: file has no columns", path.display());
    }
    Ok(table)
}
