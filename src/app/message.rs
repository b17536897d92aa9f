// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::demo_preview::{self, Layout};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the demo block at this index.
    Demo(usize, demo_preview::Message),
    /// The window is up; live examples may mount.
    Mounted,
    /// Frame tick while toasts or panels are animating.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DEMO_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory of extra demo files.
    pub demo_dir: Option<String>,
    /// Optional layout override; takes precedence over the config file.
    pub layout: Option<Layout>,
}
