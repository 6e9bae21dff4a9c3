//! Argument contracts for remote commands.
//!
//! The core hands a leaf the leftover words unexamined; an [`ArgSpec`]
//! turns them into the JSON parameter object sent to the agent, or into a
//! [`UsageError`] the handler prints next to the command's usage line.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing argument <{0}>")]
    Missing(&'static str),
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
    #[error("{0} needs a value")]
    MissingValue(&'static str),
}

/// Positional and flag arguments a command accepts.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    usage: &'static str,
    required: Vec<&'static str>,
    optional: Vec<&'static str>,
    switches: Vec<&'static str>,
    options: Vec<&'static str>,
    rest: Option<(&'static str, bool)>,
}

impl ArgSpec {
    /// A command taking no arguments at all.
    pub fn new(usage: &'static str) -> Self {
        Self {
            usage,
            required: Vec::new(),
            optional: Vec::new(),
            switches: Vec::new(),
            options: Vec::new(),
            rest: None,
        }
    }

    pub fn required(mut self, name: &'static str) -> Self {
        self.required.push(name);
        self
    }

    /// Optional positional, filled after every required one.
    pub fn optional(mut self, name: &'static str) -> Self {
        self.optional.push(name);
        self
    }

    /// Boolean flag such as `--string`. Always present in the parameters.
    pub fn switch(mut self, flag: &'static str) -> Self {
        self.switches.push(flag);
        self
    }

    /// Flag followed by a value, such as `--json <file>`.
    pub fn option(mut self, flag: &'static str) -> Self {
        self.options.push(flag);
        self
    }

    /// Every remaining word, joined with single spaces. Required.
    pub fn rest(mut self, name: &'static str) -> Self {
        self.rest = Some((name, true));
        self
    }

    pub fn optional_rest(mut self, name: &'static str) -> Self {
        self.rest = Some((name, false));
        self
    }

    #[inline]
    pub fn usage(&self) -> &'static str {
        self.usage
    }

    /// Match `args` against the contract.
    pub fn parse(&self, args: &[String]) -> Result<Map<String, Value>, UsageError> {
        let mut params = Map::new();
        for flag in &self.switches {
            params.insert(param_key(flag), Value::Bool(false));
        }

        let mut positionals = Vec::new();
        let mut words = args.iter();
        while let Some(word) = words.next() {
            if let Some(flag) = self.switches.iter().find(|f| **f == word.as_str()) {
                params.insert(param_key(flag), Value::Bool(true));
            } else if let Some(flag) = self.options.iter().find(|f| **f == word.as_str()) {
                let value = words.next().ok_or(UsageError::MissingValue(*flag))?;
                params.insert(param_key(flag), Value::String(value.clone()));
            } else {
                positionals.push(word.as_str());
            }
        }

        let mut positionals = positionals.into_iter();
        for name in &self.required {
            let value = positionals.next().ok_or(UsageError::Missing(*name))?;
            params.insert(param_key(name), Value::String(value.to_string()));
        }
        for name in &self.optional {
            if let Some(value) = positionals.next() {
                params.insert(param_key(name), Value::String(value.to_string()));
            }
        }

        let leftover: Vec<&str> = positionals.collect();
        match self.rest {
            Some((name, required)) => {
                if !leftover.is_empty() {
                    params.insert(param_key(name), Value::String(leftover.join(" ")));
                } else if required {
                    return Err(UsageError::Missing(name));
                }
            }
            None => {
                if let Some(extra) = leftover.first() {
                    return Err(UsageError::Unexpected(extra.to_string()));
                }
            }
        }

        Ok(params)
    }
}

/// `--include-parents` becomes `include_parents`.
fn param_key(name: &str) -> String {
    name.trim_start_matches('-').replace('-', "_")
}
