//! sentra - Terminal mood journal
//!
//! Records short journal entries with an optional 1-5 mood, keeps them in a
//! local JSON log, charts the recent mood trend, and asks a remote classifier
//! to label free text with a mood category.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SentraError;
