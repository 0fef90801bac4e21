pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use longview_match::{MatchResult, Pattern, PatternError};
