//! Model types for classified analysis content.
//!
//! This module defines the intermediate representation that bridges the
//! block pipeline and presentation layers: lines, blocks, inline spans and
//! the upstream response that carries the analysis text.

mod analysis;
mod block;
mod inline;
mod product;

pub use analysis::Analysis;
pub use block::{Block, Line};
pub use inline::{InlineSpan, InlineText};
pub use product::{Product, RatingValue, RecommendationResponse};
