//! Configuration types for XDSM diagram rendering.
//!
//! All types implement [`serde::Deserialize`]; every field is optional in
//! the source and falls back to the value of [`Default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Grid serialization and collision handling.
//! - [`StyleConfig`] - The style sheet the rendered picture refers to.
//! - [`ExportConfig`] - Which files the TikZ exporter writes.
//!
//! # Example
//!
//! ```
//! # use xdsm::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.layout().row_comments());
//! assert_eq!(config.style().diagram_styles_path(), "diagram_styles");
//! assert!(config.export().standalone());
//! ```

use serde::Deserialize;

/// Style sheet referenced when none is configured.
pub const DEFAULT_DIAGRAM_STYLES_PATH: &str = "diagram_styles";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, export: ExportConfig) -> Self {
        Self {
            layout,
            style,
            export,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Grid layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Prefix each serialized grid row with a `%Row <i>` comment.
    row_comments: bool,

    /// Let a later connection replace an earlier one mapped to the same
    /// grid cell instead of failing the build.
    allow_cell_overwrite: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_comments: true,
            allow_cell_overwrite: false,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(row_comments: bool, allow_cell_overwrite: bool) -> Self {
        Self {
            row_comments,
            allow_cell_overwrite,
        }
    }

    pub fn row_comments(&self) -> bool {
        self.row_comments
    }

    pub fn allow_cell_overwrite(&self) -> bool {
        self.allow_cell_overwrite
    }
}

/// Style sheet configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Path `\input` by the picture to define the XDSM node styles.
    #[serde(default)]
    diagram_styles_path: Option<String>,
}

impl StyleConfig {
    /// Creates a [`StyleConfig`] referring to the given style sheet.
    pub fn new(diagram_styles_path: impl Into<String>) -> Self {
        Self {
            diagram_styles_path: Some(diagram_styles_path.into()),
        }
    }

    /// Returns the configured style sheet path, or
    /// [`DEFAULT_DIAGRAM_STYLES_PATH`].
    pub fn diagram_styles_path(&self) -> &str {
        self.diagram_styles_path
            .as_deref()
            .unwrap_or(DEFAULT_DIAGRAM_STYLES_PATH)
    }
}

/// TikZ export configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Also write a standalone LaTeX document that inputs the picture.
    standalone: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { standalone: true }
    }
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    pub fn new(standalone: bool) -> Self {
        Self { standalone }
    }

    pub fn standalone(&self) -> bool {
        self.standalone
    }
}
