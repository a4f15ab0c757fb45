// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named device profiles applied via spread into context creation.

use crate::cli::BrowserName;

/// Preset options for one emulated device.
#[derive(Clone, Debug)]
pub struct DeviceProfile {
    /// Name as written after `--device=` and inside `devices['...']`.
    pub name: &'static str,
    /// Emulated user agent.
    pub user_agent: &'static str,
    /// Viewport width and height in CSS pixels.
    pub viewport: (u32, u32),
    /// Device pixel ratio.
    pub device_scale_factor: f64,
    /// Mobile layout quirks.
    pub is_mobile: bool,
    /// Touch event support.
    pub has_touch: bool,
    /// Browser the profile is meant for.
    pub default_browser: BrowserName,
}

/// Known profiles, mirroring the recorder's public device descriptors.
pub const DEVICES: &[DeviceProfile] = &[
    DeviceProfile {
        name: "Pixel 2",
        user_agent: "Mozilla/5.0 (Linux; Android 8.0; Pixel 2 Build/OPD3.170816.012) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.0 Mobile Safari/537.36",
        viewport: (411, 731),
        device_scale_factor: 2.625,
        is_mobile: true,
        has_touch: true,
        default_browser: BrowserName::Chromium,
    },
    DeviceProfile {
        name: "Pixel 2 XL",
        user_agent: "Mozilla/5.0 (Linux; Android 8.0.0; Pixel 2 XL Build/OPD1.170816.004) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.0 Mobile Safari/537.36",
        viewport: (411, 823),
        device_scale_factor: 3.5,
        is_mobile: true,
        has_touch: true,
        default_browser: BrowserName::Chromium,
    },
    DeviceProfile {
        name: "iPhone 11",
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 14_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Mobile/15E148 Safari/604.1",
        viewport: (414, 896),
        device_scale_factor: 2.0,
        is_mobile: true,
        has_touch: true,
        default_browser: BrowserName::Webkit,
    },
    DeviceProfile {
        name: "iPhone 11 Pro",
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 14_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Mobile/15E148 Safari/604.1",
        viewport: (375, 812),
        device_scale_factor: 3.0,
        is_mobile: true,
        has_touch: true,
        default_browser: BrowserName::Webkit,
    },
];

/// Look up a profile by exact name.
pub fn find(name: &str) -> Option<&'static DeviceProfile> {
    DEVICES.iter().find(|d| d.name == name)
}

/// Known device names, for error messages.
pub fn known_names() -> String {
    DEVICES
        .iter()
        .map(|d| d.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "devices_tests.rs"]
mod tests;
