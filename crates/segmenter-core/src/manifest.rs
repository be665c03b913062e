// crates/segmenter-core/src/manifest.rs
//
// Run manifest: one line per emitted file with size and crc32, plus a run id
// derived from the normalized input, the policy and the agent list.

use csv::{Terminator, WriterBuilder};

use crate::campaign::Agent;
use crate::error::{Result, SegError};
use crate::policy::Policy;
use crate::segment::Segment;
use crate::table::{csv_io, Table};

pub const MANIFEST_FILE: &str = "manifest.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    pub index: usize,
    pub agent: String,
    pub file_name: String,
    pub rows: usize,
    pub bytes: usize,
    pub crc32: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub run_id: String,
    pub policy: String,
    pub entries: Vec<ManifestEntry>,
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Stable id for (input, policy, agents). Hex of the first 16 blake3 bytes.
pub fn run_id_hex(table: &Table, policy: Policy, agents: &[Agent]) -> Result<String> {
    let mut b = csv_io::to_csv(table)?.into_bytes();
    b.push(0);
    b.extend_from_slice(policy.to_string().as_bytes());
    for a in agents {
        b.push(0);
        b.extend_from_slice(a.name().as_bytes());
    }
    Ok(hex(&blake3_16(&b)))
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

impl Manifest {
    /// One entry per segment, sized and checksummed from its serialized CSV.
    pub fn build(run_id: String, policy: Policy, segments: &[Segment]) -> Result<Self> {
        let entries = segments
            .iter()
            .map(|s| -> Result<ManifestEntry> {
                let d = s.to_download()?;
                Ok(ManifestEntry {
                    index: s.index,
                    agent: s.agent.name().to_owned(),
                    bytes: d.csv.len(),
                    crc32: crc32(d.csv.as_bytes()),
                    file_name: d.file_name,
                    rows: s.n_rows(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            run_id,
            policy: policy.to_string(),
            entries,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.entries.iter().map(|e| e.rows).sum()
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut w = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        w.write_record([
            "run_id", "policy", "segment", "agent", "file_name", "rows", "bytes", "crc32",
        ])?;
        for e in &self.entries {
            w.write_record([
                self.run_id.clone(),
                self.policy.clone(),
                e.index.to_string(),
                e.agent.clone(),
                e.file_name.clone(),
                e.rows.to_string(),
                e.bytes.to_string(),
                format!("{:08x}", e.crc32),
            ])?;
        }

        let bytes = w.into_inner().map_err(|e| SegError::Io(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| SegError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_matches_reference_vector() {
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
    }

    #[test]
    fn hex_is_lower_and_padded() {
        assert_eq!(hex(&[0x00, 0x0f, 0xab]), "000fab");
    }
}
