// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action commands read from the scripted driver.
//!
//! The driver writes one command per line on stdin:
//!
//! ```text
//! goto <url>
//! click <selector>
//! fill <selector> <value>
//! press <selector> <key>
//! close
//! ```
//!
//! Selectors must not contain whitespace; a `fill` value may (it is the rest
//! of the line). Blank lines and `#` comments are ignored.

/// A single recorded action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Navigate the page.
    Goto {
        /// Target URL.
        url: String,
    },
    /// Click an element.
    Click {
        /// Element selector.
        selector: String,
    },
    /// Fill a form field.
    Fill {
        /// Element selector.
        selector: String,
        /// Text to enter.
        value: String,
    },
    /// Press a key on an element.
    Press {
        /// Element selector.
        selector: String,
        /// Key name (e.g. `Enter`).
        key: String,
    },
    /// End the recorded session.
    Close,
}

/// Errors parsing one driver line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActionParseError {
    /// The line does not start with a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command is missing a required argument.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected next.
        what: &'static str,
    },
}

impl Action {
    /// Parse one driver line. Blank lines and comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Action>, ActionParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        if line == "close" {
            return Ok(Some(Action::Close));
        }

        if let Some(rest) = line.strip_prefix("goto ") {
            let url = rest.trim();
            if url.is_empty() {
                return Err(ActionParseError::MissingArgument {
                    command: "goto",
                    what: "url",
                });
            }
            return Ok(Some(Action::Goto {
                url: url.to_string(),
            }));
        }

        if let Some(rest) = line.strip_prefix("click ") {
            let selector = rest.trim();
            if selector.is_empty() {
                return Err(ActionParseError::MissingArgument {
                    command: "click",
                    what: "selector",
                });
            }
            return Ok(Some(Action::Click {
                selector: selector.to_string(),
            }));
        }

        if let Some(rest) = line.strip_prefix("fill ") {
            let rest = rest.trim();
            let Some((selector, value)) = rest.split_once(' ') else {
                return Err(ActionParseError::MissingArgument {
                    command: "fill",
                    what: "value",
                });
            };
            return Ok(Some(Action::Fill {
                selector: selector.to_string(),
                value: value.trim_start().to_string(),
            }));
        }

        if let Some(rest) = line.strip_prefix("press ") {
            let rest = rest.trim();
            let Some((selector, key)) = rest.split_once(' ') else {
                return Err(ActionParseError::MissingArgument {
                    command: "press",
                    what: "key",
                });
            };
            return Ok(Some(Action::Press {
                selector: selector.to_string(),
                key: key.trim().to_string(),
            }));
        }

        Err(ActionParseError::UnknownCommand(line.to_string()))
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
