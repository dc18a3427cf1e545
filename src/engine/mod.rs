pub mod compat;
pub mod matching;
pub mod scoring;
