//! Analysis parsing pipeline.
//!
//! Text flows strictly forward: [`Cleaner`] → [`LineClassifier`] →
//! [`format_inline`] (per captured field) → [`BlockBuilder`]. Every stage is a
//! pure function of its input.

mod builder;
mod classifier;
mod cleaner;
mod inline;
mod options;

pub use builder::{build, BlockBuilder, Blocks};
pub use classifier::{classify, Classified, LineClassifier, Rule, RULES};
pub use cleaner::{clean, Cleaner, CleanupOptions, CleanupPreset};
pub use inline::{format_inline, EMPHASIS_MARKER};
pub use options::ParseOptions;
