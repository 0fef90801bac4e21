//! Pattern matching with named placeholders, validators and default values.

use crate::template::{compile_source, tokenize, validator_source, Token};
use once_cell::unsync::OnceCell;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("placeholder '{name}' appears more than once in the template")]
    DuplicatePlaceholder { name: String },
    #[error("failed to compile template: {message}")]
    Compile { message: String },
    #[error("invalid validator for '{name}': {message}")]
    InvalidValidator { name: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Match(HashMap<String, String>),
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match(_))
    }

    pub fn values(&self) -> Option<&HashMap<String, String>> {
        match self {
            MatchResult::Match(values) => Some(values),
            MatchResult::NoMatch => None,
        }
    }

    pub fn into_values(self) -> Option<HashMap<String, String>> {
        match self {
            MatchResult::Match(values) => Some(values),
            MatchResult::NoMatch => None,
        }
    }
}

/// The template regex plus the validators of the placeholders it contains.
#[derive(Debug, Clone)]
struct Compiled {
    source: String,
    regex: Regex,
    validators: HashMap<String, Regex>,
}

/// A template pattern that extracts named values from a string.
///
/// Compilation happens on first use and is cached. Adding a validator or a
/// default value drops the cached form, so the next match sees the new
/// configuration.
///
/// # Example
///
/// ```
/// use longview_match::{MatchResult, Pattern};
///
/// let pattern = Pattern::new("/users/{id}/{tab}")
///     .validator("id", r"\d+")
///     .default_value("tab", "profile");
///
/// let values = pattern.match_extract("/users/42/").unwrap().into_values().unwrap();
/// assert_eq!(values["id"], "42");
/// assert_eq!(values["tab"], "profile");
///
/// assert_eq!(pattern.match_extract("/users/bob/").unwrap(), MatchResult::NoMatch);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    template: String,
    validators: HashMap<String, String>,
    defaults: HashMap<String, String>,
    tokens: OnceCell<Vec<Token>>,
    compiled: OnceCell<Compiled>,
}

impl Pattern {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            validators: HashMap::new(),
            defaults: HashMap::new(),
            tokens: OnceCell::new(),
            compiled: OnceCell::new(),
        }
    }

    pub fn validator(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.add_validator(name, fragment);
        self
    }

    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_default_value(name, value);
        self
    }

    /// Registers or replaces the validator for `name`.
    ///
    /// The fragment is anchored at both ends when compiled; a non-empty
    /// capture has to match it entirely.
    pub fn add_validator(
        &mut self,
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) -> &mut Self {
        self.compiled.take();
        self.validators.insert(name.into(), fragment.into());
        self
    }

    /// Registers or replaces the default value for `name`.
    ///
    /// The placeholder becomes optional; when it captures nothing the
    /// default is reported instead, without validation.
    pub fn add_default_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.compiled.take();
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> Vec<&str> {
        self.tokens()
            .iter()
            .filter_map(|token| match token {
                Token::Placeholder(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The anchored expression the template compiles to.
    pub fn regex_source(&self) -> Result<&str, PatternError> {
        Ok(&self.compiled()?.source)
    }

    pub fn matches(&self, subject: &str) -> Result<bool, PatternError> {
        Ok(self.match_extract(subject)?.is_match())
    }

    /// Matches `subject` as a whole and extracts placeholder values.
    ///
    /// Configured defaults are always present in the result. A placeholder
    /// that captured a non-empty value overrides its default, after passing
    /// its validator; a failing validator turns the whole match into
    /// [`MatchResult::NoMatch`]. Errors only come from compiling the pattern.
    pub fn match_extract(&self, subject: &str) -> Result<MatchResult, PatternError> {
        let compiled = self.compiled()?;

        let Some(caps) = compiled.regex.captures(subject) else {
            return Ok(MatchResult::NoMatch);
        };

        let mut values = self.defaults.clone();

        for name in compiled.regex.capture_names().flatten() {
            let Some(text) = caps.name(name).map(|m| m.as_str()).filter(|t| !t.is_empty())
            else {
                continue;
            };

            if let Some(validator) = compiled.validators.get(name) {
                if !validator.is_match(text) {
                    trace!(placeholder = name, value = text, "validator rejected capture");
                    return Ok(MatchResult::NoMatch);
                }
            }

            values.insert(name.to_string(), text.to_string());
        }

        Ok(MatchResult::Match(values))
    }

    fn tokens(&self) -> &[Token] {
        self.tokens.get_or_init(|| tokenize(&self.template))
    }

    fn compiled(&self) -> Result<&Compiled, PatternError> {
        self.compiled.get_or_try_init(|| self.compile())
    }

    fn compile(&self) -> Result<Compiled, PatternError> {
        let tokens = self.tokens();
        let source = compile_source(tokens, &self.defaults)?;
        let regex = Regex::new(&source).map_err(|e| PatternError::Compile {
            message: e.to_string(),
        })?;

        let mut validators = HashMap::new();
        for token in tokens {
            let Token::Placeholder(name) = token else {
                continue;
            };
            let Some(fragment) = self.validators.get(name) else {
                continue;
            };
            let validator = Regex::new(&validator_source(fragment)).map_err(|e| {
                PatternError::InvalidValidator {
                    name: name.clone(),
                    message: e.to_string(),
                }
            })?;
            validators.insert(name.clone(), validator);
        }

        debug!(
            template = %self.template,
            regex = %source,
            validators = validators.len(),
            "compiled pattern"
        );

        Ok(Compiled {
            source,
            regex,
            validators,
        })
    }
}
