//! Template patterns with named placeholders, validators and default values.
//!
//! A template mixes literal text with three kinds of tokens: `{name}`
//! captures a value, `*` matches any run of characters and `+` matches a
//! run of word characters. Each placeholder can carry a validator that a
//! captured value must fully match, and a default value that is reported
//! when the placeholder captures nothing.
//!
//! # Example
//!
//! ```
//! use longview_match::{MatchResult, Pattern};
//!
//! let pattern = Pattern::new("#{foo}#{bar}#").validator("foo", r"\d+");
//!
//! // Pattern matches and every validator accepts its capture
//! let values = pattern.match_extract("#1234#5678#").unwrap().into_values().unwrap();
//! assert_eq!(values["foo"], "1234");
//! assert_eq!(values["bar"], "5678");
//!
//! // A validator rejecting its capture is just another non-match
//! assert_eq!(pattern.match_extract("#12ab#5678#").unwrap(), MatchResult::NoMatch);
//!
//! // Escaped tokens are literal text
//! assert!(longview_match::Pattern::new(r"\{foo}").matches("{foo}").unwrap());
//! ```

mod matcher;
mod template;

pub use matcher::{MatchResult, Pattern, PatternError};
pub use template::{tokenize, Token};
