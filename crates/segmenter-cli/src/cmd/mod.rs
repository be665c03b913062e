// crates/segmenter-cli/src/cmd/mod.rs

pub mod campaigns;
pub mod inspect;
pub mod split;
