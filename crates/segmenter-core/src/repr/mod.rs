// crates/segmenter-core/src/repr/mod.rs

pub mod text_norm;
