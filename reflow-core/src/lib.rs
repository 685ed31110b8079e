//! Sentence-aware text reflowing
//!
//! This crate turns text made of short, hard-broken lines into wrapped
//! paragraphs: whitespace is collapsed, the text is split into sentences,
//! consecutive sentences are grouped into paragraphs of a configured size,
//! and each paragraph is re-wrapped at a configured width.
//!
//! The crate performs no I/O; it is a pure transformation over `&str`.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod normalize;
pub mod paragraph;
pub mod processor;
pub mod sentence;
pub mod wrap;

// Re-export key types
pub use config::{ReflowOptions, DEFAULT_LINE_WIDTH, DEFAULT_SENTENCES_PER_PARAGRAPH};
pub use error::{CoreError, Result};
pub use processor::{reformat, Reflower};
