// SPDX-License-Identifier: MPL-2.0
//! Demo description files.
//!
//! Demos are small TOML documents:
//!
//! ```toml
//! title = "Basic button"
//! description = "Use `type`, `plain` and `round` to style buttons."
//! component = "button-basic"
//! order = 1
//! code = "%3Ctemplate%3E..."       # URI-component encoded raw source
//! show_code = "%3Cpre%20class..."  # URI-component encoded highlighted markup
//! ```
//!
//! A set ships embedded in the binary; `--demo-dir` adds files from disk, which
//! replace embedded demos of the same file name. Unreadable files are logged,
//! skipped and kept in [`Catalog::skipped`] so the app can report them.

pub mod live;

use crate::error::{Error, Result};
use crate::ui::demo_preview::source::decode_component;
use crate::ui::demo_preview::{Demo, SourceMarkup};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/demos/"]
struct Embedded;

const EXTENSION: &str = ".toml";

#[derive(Debug, Deserialize)]
struct DemoFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    component: String,
    code: String,
    #[serde(default)]
    show_code: Option<String>,
    #[serde(default)]
    order: i32,
}

/// A loaded demo and where it sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub order: i32,
    pub demo: Demo,
}

/// Parses one demo file.
pub fn parse_demo(name: &str, content: &str) -> Result<Entry> {
    let file: DemoFile =
        toml::from_str(content).map_err(|err| Error::Catalog(format!("{name}: {err}")))?;

    let source = decode_component(&file.code)?;
    let markup = match file.show_code {
        Some(encoded) => SourceMarkup::parse(&decode_component(&encoded)?),
        None => SourceMarkup::plain(&source),
    };

    Ok(Entry {
        name: name.to_string(),
        order: file.order,
        demo: Demo {
            title: file.title,
            description: file.description,
            source,
            markup,
            example: file.component,
        },
    })
}

/// A demo file that could not be loaded.
#[derive(Debug, Clone)]
pub struct SkippedDemo {
    pub name: String,
    pub error: Error,
}

#[derive(Debug, Default)]
struct Loader {
    by_name: BTreeMap<String, Entry>,
    skipped: Vec<SkippedDemo>,
}

impl Loader {
    fn insert(&mut self, name: &str, content: &str) {
        match parse_demo(name, content) {
            Ok(entry) => {
                self.skipped.retain(|skipped| skipped.name != name);
                self.by_name.insert(name.to_string(), entry);
            }
            Err(error) => self.skip(name, error),
        }
    }

    fn skip(&mut self, name: &str, error: Error) {
        tracing::warn!(demo = name, error = %error, "skipping demo");
        self.skipped.push(SkippedDemo {
            name: name.to_string(),
            error,
        });
    }

    fn load_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = filename.strip_suffix(EXTENSION) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(content) => self.insert(name, &content),
                Err(err) => self.skip(name, err.into()),
            }
        }
        Ok(())
    }

    fn finish(self) -> Catalog {
        let mut entries: Vec<Entry> = self.by_name.into_values().collect();
        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Catalog {
            entries,
            skipped: self.skipped,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    skipped: Vec<SkippedDemo>,
}

impl Catalog {
    /// Loads embedded demos, then demos from `dir` if given.
    #[must_use]
    pub fn load(dir: Option<&Path>) -> Self {
        let mut loader = Loader::default();

        for file in Embedded::iter() {
            let filename = file.as_ref();
            let Some(name) = filename.strip_suffix(EXTENSION) else {
                continue;
            };
            let Some(content) = Embedded::get(filename) else {
                continue;
            };
            let text = String::from_utf8_lossy(content.data.as_ref());
            loader.insert(name, &text);
        }

        if let Some(dir) = dir {
            if let Err(err) = loader.load_dir(dir) {
                tracing::warn!(dir = %dir.display(), error = %err, "demo directory unreadable");
            }
        }

        let catalog = loader.finish();
        tracing::info!(
            count = catalog.len(),
            skipped = catalog.skipped.len(),
            "demo catalog loaded"
        );
        catalog
    }

    /// Loads only the demos in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut loader = Loader::default();
        loader.load_dir(dir)?;
        Ok(loader.finish())
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Demo files that were found but could not be loaded.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedDemo] {
        &self.skipped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the catalog into demos in display order.
    #[must_use]
    pub fn into_demos(self) -> Vec<Demo> {
        self.entries.into_iter().map(|entry| entry.demo).collect()
    }
}
