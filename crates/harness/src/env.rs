// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment composition for fixture contexts.
//!
//! A suite combines independent environments (a file server, a
//! platform-specific browser) into one fixture context. Composition is an
//! explicit ordered list of providers: setup runs front to back, teardown in
//! reverse, and the fragments merge field-wise with later providers winning.

use std::collections::HashMap;

use crate::error::HarnessError;

/// Context values contributed by one provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextFragment {
    /// Browser identity (e.g. `chromium`).
    pub browser_name: Option<String>,
    /// Non-default browser channel, if any.
    pub browser_channel: Option<String>,
    /// Base URL served to the tool under test.
    pub base_url: Option<String>,
    /// Free-form extras for suite-specific values.
    pub extra: HashMap<String, String>,
}

impl ContextFragment {
    /// Merge `other` into `self`; fields set by `other` win.
    pub fn merge(mut self, other: ContextFragment) -> Self {
        if other.browser_name.is_some() {
            self.browser_name = other.browser_name;
        }
        if other.browser_channel.is_some() {
            self.browser_channel = other.browser_channel;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        self.extra.extend(other.extra);
        self
    }
}

/// One composable environment.
pub trait EnvProvider: Send {
    /// Name used in error reports.
    fn name(&self) -> &str;

    /// Bring the environment up and contribute context values.
    fn setup(&mut self) -> Result<ContextFragment, HarnessError>;

    /// Release resources. Called in reverse setup order; must tolerate being
    /// called after a failed or skipped setup.
    fn teardown(&mut self) {}
}

/// Ordered provider list composing one fixture context.
pub struct EnvStack {
    providers: Vec<Box<dyn EnvProvider>>,
    tag: Option<String>,
    active: usize,
}

impl EnvStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tag: None,
            active: 0,
        }
    }

    /// Restrict this stack to runs selecting `tag`.
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Append a provider. Setup order is append order.
    pub fn push(mut self, provider: Box<dyn EnvProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// The execution tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Run all setups in order and merge their fragments.
    ///
    /// On failure, providers already set up are torn down (in reverse)
    /// before the error propagates.
    pub fn setup(&mut self) -> Result<ContextFragment, HarnessError> {
        let mut context = ContextFragment::default();
        for i in 0..self.providers.len() {
            match self.providers[i].setup() {
                Ok(fragment) => {
                    self.active = i + 1;
                    context = context.merge(fragment);
                }
                Err(e) => {
                    self.teardown();
                    return Err(e);
                }
            }
        }
        Ok(context)
    }

    /// Tear down in reverse order of setup. Idempotent.
    pub fn teardown(&mut self) {
        while self.active > 0 {
            self.active -= 1;
            self.providers[self.active].teardown();
        }
    }
}

impl Default for EnvStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnvStack {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Provider contributing a fixed browser identity and channel.
pub struct BrowserEnv {
    name: String,
    channel: Option<String>,
}

impl BrowserEnv {
    /// A browser identity with no channel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel: None,
        }
    }

    /// Select a distribution channel.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

impl EnvProvider for BrowserEnv {
    fn name(&self) -> &str {
        "browser"
    }

    fn setup(&mut self) -> Result<ContextFragment, HarnessError> {
        Ok(ContextFragment {
            browser_name: Some(self.name.clone()),
            browser_channel: self.channel.clone(),
            ..ContextFragment::default()
        })
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
