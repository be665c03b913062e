// crates/segmenter-cli/src/io/mod.rs

pub mod segment_files;
pub mod table_file;
