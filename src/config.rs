//! Timeline configuration.
//!
//! Every constant the layout uses comes from here. Values can be built in code or read from TOML;
//! missing keys fall back to the defaults.

use crate::style::{AllDayEventViewStyle, SketchShadow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use timeline_core::error::{require_positive, LayoutError};
use timeline_core::{ContentPolicy, HandleGeometry, InfoRowPolicy, RowInsets};
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] LayoutError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub all_day: AllDayConfig,
    pub event_view: EventViewConfig,
}

impl TimelineConfig {
    /// Parses and validates a TOML config.
    pub fn from_toml_str(contents: &str) -> Result<TimelineConfig, ConfigError> {
        let config: TimelineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<TimelineConfig, ConfigError> {
        let path = path.as_ref();
        debug!("loading timeline config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = TimelineConfig::from_toml_str(&contents)?;
        info!("loaded timeline config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.all_day.validate()?;
        self.event_view.validate()
    }
}

/// All-day band configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllDayConfig {
    pub row_height: f64,
    /// The band never reserves more than this; extra rows scroll.
    pub max_band_height: f64,
    pub inset_left: f64,
    pub inset_right: f64,
    pub style: AllDayEventViewStyle,
}

impl Default for AllDayConfig {
    fn default() -> Self {
        let insets = RowInsets::default();
        AllDayConfig {
            row_height: 24.,
            max_band_height: 168.,
            inset_left: insets.left,
            inset_right: insets.right,
            style: AllDayEventViewStyle::default(),
        }
    }
}

impl AllDayConfig {
    pub fn row_insets(&self) -> RowInsets {
        RowInsets {
            left: self.inset_left,
            right: self.inset_right,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        require_positive("row height", self.row_height)?;
        require_positive("max band height", self.max_band_height)?;
        self.row_insets().validate()
    }
}

/// Timed event view configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventViewConfig {
    pub handle_diameter: f64,
    pub handle_margin_left: f64,
    pub handle_margin_right: f64,
    pub accent_width: f64,
    pub trailing_accent_offset: f64,
    pub info_row: InfoRowConfig,
    /// Shadow drawn while the event is being edited.
    pub editing_shadow: SketchShadow,
}

impl Default for EventViewConfig {
    fn default() -> Self {
        let handles = HandleGeometry::default();
        let content = ContentPolicy::default();
        EventViewConfig {
            handle_diameter: handles.diameter,
            handle_margin_left: handles.margin_left,
            handle_margin_right: handles.margin_right,
            accent_width: content.accent_width,
            trailing_accent_offset: content.trailing_accent_offset,
            info_row: InfoRowConfig::default(),
            editing_shadow: SketchShadow::editing(),
        }
    }
}

impl EventViewConfig {
    pub fn handle_geometry(&self) -> HandleGeometry {
        HandleGeometry {
            diameter: self.handle_diameter,
            margin_left: self.handle_margin_left,
            margin_right: self.handle_margin_right,
        }
    }

    pub fn content_policy(&self) -> ContentPolicy {
        ContentPolicy {
            accent_width: self.accent_width,
            trailing_accent_offset: self.trailing_accent_offset,
            info_row: self.info_row.policy(),
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.handle_geometry().validate()?;
        self.content_policy().validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoRowConfig {
    pub compact_threshold: f64,
    pub compact_inset: f64,
    pub max_height: f64,
}

impl Default for InfoRowConfig {
    fn default() -> Self {
        let policy = InfoRowPolicy::default();
        InfoRowConfig {
            compact_threshold: policy.compact_threshold,
            compact_inset: policy.compact_inset,
            max_height: policy.max_height,
        }
    }
}

impl InfoRowConfig {
    pub fn policy(&self) -> InfoRowPolicy {
        InfoRowPolicy {
            compact_threshold: self.compact_threshold,
            compact_inset: self.compact_inset,
            max_height: self.max_height,
        }
    }
}
