// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JavaScript source emission for recorded sessions.
//!
//! Emitted text is the recorder's wire contract: consumers assert on exact
//! substrings, so spacing, field order, and trailing commas here are load
//! bearing. Field order in context options is fixed: device spread, then
//! color scheme, then storage state.

use crate::actions::Action;
use crate::cli::{BrowserName, ColorScheme};

/// Options that shape the generated preamble and teardown.
#[derive(Clone, Debug)]
pub struct ScriptOptions {
    /// Browser identifier used in the import and launch lines.
    pub browser: BrowserName,
    /// Distribution channel, emitted into the launch options when set.
    pub channel: Option<String>,
    /// Color-scheme override for context creation.
    pub color_scheme: Option<ColorScheme>,
    /// Device profile name, spread into context creation.
    pub device: Option<String>,
    /// Storage-state path embedded in context creation.
    pub load_storage: Option<String>,
    /// Storage-state path embedded in the teardown save call.
    pub save_storage: Option<String>,
}

impl ScriptOptions {
    fn has_context_options(&self) -> bool {
        self.device.is_some() || self.color_scheme.is_some() || self.load_storage.is_some()
    }

    /// Import + launch + context-creation lines, emitted once at startup.
    pub fn preamble(&self) -> String {
        let browser = self.browser.as_str();
        let mut out = String::new();

        if self.device.is_some() {
            out.push_str(&format!(
                "const {{ {}, devices }} = require('playwright');\n",
                browser
            ));
        } else {
            out.push_str(&format!("const {{ {} }} = require('playwright');\n", browser));
        }

        out.push_str("\n(async () => {\n");
        out.push_str(&format!("  const browser = await {}.launch({{\n", browser));
        match self.channel {
            Some(ref channel) => {
                out.push_str(&format!(
                    "    headless: false,\n    channel: {}\n",
                    js_string(channel)
                ));
            }
            None => out.push_str("    headless: false\n"),
        }
        out.push_str("  });\n");

        if !self.has_context_options() {
            out.push_str("  const context = await browser.newContext();\n");
        } else {
            out.push_str("  const context = await browser.newContext({\n");
            if let Some(ref device) = self.device {
                // The spread keeps its trailing comma even as the last field.
                out.push_str(&format!("    ...devices[{}],\n", js_string(device)));
            }
            let mut fields = Vec::new();
            if let Some(scheme) = self.color_scheme {
                fields.push(format!("    colorScheme: '{}'", scheme.as_str()));
            }
            if let Some(ref path) = self.load_storage {
                fields.push(format!("    storageState: {}", js_string(path)));
            }
            if !fields.is_empty() {
                out.push_str(&fields.join(",\n"));
                out.push('\n');
            }
            out.push_str("  });\n");
        }
        out
    }

    /// Teardown lines, emitted once the recorded session ends.
    pub fn teardown(&self) -> String {
        let mut out = String::new();
        out.push_str("\n  // Close page\n  await page.close();\n");
        out.push_str("\n  // ---------------------\n");
        if let Some(ref path) = self.save_storage {
            out.push_str(&format!(
                "  await context.storageState({{ path: {} }});\n",
                js_string(path)
            ));
        }
        out.push_str("  await context.close();\n");
        out.push_str("  await browser.close();\n");
        out.push_str("})();");
        out
    }
}

/// The page-open block preceding the first navigation.
pub fn page_open_block() -> &'static str {
    "\n  // Open new page\n  const page = await context.newPage();\n"
}

/// One action block: a human-readable comment line plus the call.
pub fn action_block(action: &Action) -> String {
    match action {
        Action::Goto { url } => {
            format!("\n  // Go to {}\n  await page.goto({});\n", url, js_string(url))
        }
        Action::Click { selector } => format!(
            "\n  // Click {}\n  await page.click({});\n",
            selector,
            js_string(selector)
        ),
        Action::Fill { selector, value } => format!(
            "\n  // Fill {}\n  await page.fill({}, {});\n",
            selector,
            js_string(selector),
            js_string(value)
        ),
        Action::Press { selector, key } => format!(
            "\n  // Press {}\n  await page.press({}, {});\n",
            key,
            js_string(selector),
            js_string(key)
        ),
        // Close emits the teardown block, not an action block.
        Action::Close => String::new(),
    }
}

/// Quote a value as a single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
