//! Deployment configuration documents.
//!
//! Each document carries a `version`, the owning `deployment_id`, and a
//! `config_type` discriminator. [`DeploymentConfig`] bundles one of each.

mod color;
mod deployment;
mod favicon;
mod font;
mod footer;
mod header;
mod preset;
mod script;
mod script_events;
mod theme;
mod website;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

pub use color::*;
pub use deployment::*;
pub use favicon::*;
pub use font::*;
pub use footer::*;
pub use header::*;
pub use preset::*;
pub use script::*;
pub use script_events::*;
pub use theme::*;
pub use website::*;

/// The `config_type` discriminator of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    Colors,
    Fonts,
    Favicon,
    Footer,
    Header,
    /// Legacy name for a header document.
    Navigation,
    Scripts,
    Theme,
    Website,
}

impl ConfigType {
    pub const ALL: [Self; 9] = [
        Self::Colors,
        Self::Fonts,
        Self::Favicon,
        Self::Footer,
        Self::Header,
        Self::Navigation,
        Self::Scripts,
        Self::Theme,
        Self::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Fonts => "fonts",
            Self::Favicon => "favicon",
            Self::Footer => "footer",
            Self::Header => "header",
            Self::Navigation => "navigation",
            Self::Scripts => "scripts",
            Self::Theme => "theme",
            Self::Website => "website",
        }
    }
}

impl FromStr for ConfigType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownConfigType(s.to_string()))
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
