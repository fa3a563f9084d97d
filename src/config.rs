//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The page content
//! itself is fixed; configuration only controls where the page is written and
//! how it looks. Stock defaults are overridden by an optional `config.toml`
//! in the source directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_file = "index.html"  # Page filename inside the output directory
//! assets_dir = "assets"       # Copied verbatim to the output root
//!
//! [site]
//! lang = "en"
//! page_title = "VMP_Parser"   # <title> of the document
//! description = "..."         # <meta name="description">
//!
//! [theme]
//! max_width = "56rem"         # Width of the centered column
//! page_padding = "2rem"       # Padding around the column
//! radius = "0.375rem"         # Corner radius of cards and rows
//! gap = "0.75rem"             # Gap between module rows
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#0a0a0a"
//! text_muted = "#737373"      # Subtitle, descriptions, footer
//! surface = "#ffffff"         # Card background
//! muted = "#f5f5f5"           # Code block and row background
//! border = "#e5e5e5"
//! primary = "#171717"         # Module names
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#fafafa"
//! text_muted = "#a3a3a3"
//! surface = "#111111"
//! muted = "#262626"
//! border = "#262626"
//! primary = "#fafafa"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Filename of the generated page inside the output directory.
    pub output_file: String,
    /// Directory (relative to the source dir) copied to the output root.
    pub assets_dir: String,
    /// Document metadata.
    pub site: SiteMeta,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_file: "index.html".to_string(),
            assets_dir: "assets".to_string(),
            site: SiteMeta::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output_file = Path::new(&self.output_file);
        if self.output_file.is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        if output_file.components().count() != 1
            || !matches!(output_file.components().next(), Some(Component::Normal(_)))
        {
            return Err(ConfigError::Validation(
                "output_file must be a bare filename".into(),
            ));
        }
        if output_file.extension().is_none_or(|e| e != "html") {
            return Err(ConfigError::Validation(
                "output_file must end in .html".into(),
            ));
        }
        let assets = Path::new(&self.assets_dir);
        if self.assets_dir.is_empty()
            || !assets.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(ConfigError::Validation(
                "assets_dir must be a relative path inside the source directory".into(),
            ));
        }
        if self.site.lang.is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        for (key, value) in self.theme.entries() {
            check_css_value(&format!("theme.{key}"), value)?;
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (key, value) in scheme.entries() {
                check_css_value(&format!("colors.{mode}.{key}"), value)?;
            }
        }
        Ok(())
    }
}

/// Characters that could end a declaration, a rule, or the `<style>` element.
const CSS_FORBIDDEN: &[char] = &['<', '>', '{', '}', ';', '\\'];

/// Theme and color values are inlined into `<style>` unescaped, so they must
/// be a single non-empty CSS value.
fn check_css_value(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if let Some(c) = value.chars().find(|c| CSS_FORBIDDEN.contains(c) || c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "{key} contains forbidden character {c:?}"
        )));
    }
    Ok(())
}

/// Document metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Contents of `<title>`.
    pub page_title: String,
    /// Contents of `<meta name="description">`.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            page_title: "VMP_Parser".to_string(),
            description: crate::content::SUBTITLE.to_string(),
        }
    }
}

/// Layout settings, emitted as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the centered page column (CSS value).
    pub max_width: String,
    /// Padding around the page column (CSS value).
    pub page_padding: String,
    /// Corner radius of cards, code blocks and rows (CSS value).
    pub radius: String,
    /// Gap between module rows (CSS value).
    pub gap: String,
}

impl ThemeConfig {
    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("max_width", &self.max_width),
            ("page_padding", &self.page_padding),
            ("radius", &self.radius),
            ("gap", &self.gap),
        ]
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "56rem".to_string(),
            page_padding: "2rem".to_string(),
            radius: "0.375rem".to_string(),
            gap: "0.75rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text color (subtitle, descriptions, footer).
    pub text_muted: String,
    /// Card background color.
    pub surface: String,
    /// Background of the code block and module rows.
    pub muted: String,
    /// Card border color.
    pub border: String,
    /// Module name color.
    pub primary: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#0a0a0a".to_string(),
            text_muted: "#737373".to_string(),
            surface: "#ffffff".to_string(),
            muted: "#f5f5f5".to_string(),
            border: "#e5e5e5".to_string(),
            primary: "#171717".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#fafafa".to_string(),
            text_muted: "#a3a3a3".to_string(),
            surface: "#111111".to_string(),
            muted: "#262626".to_string(),
            border: "#262626".to_string(),
            primary: "#fafafa".to_string(),
        }
    }

    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("surface", &self.surface),
            ("muted", &self.muted),
            ("border", &self.border),
            ("primary", &self.primary),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// The file is sparse: `#[serde(default)]` fills in every key it omits.
/// A missing directory or file yields the stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# VMP Landing Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Filename of the generated page inside the output directory.
output_file = "index.html"

# Directory next to this file copied verbatim to the output root
# (favicon, fonts, images). Skipped when it does not exist.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
lang = "en"
page_title = "VMP_Parser"
description = "Vernacular Medical Prescription Parser — all Python backend files have been generated."

# ---------------------------------------------------------------------------
# Layout (CSS values)
# ---------------------------------------------------------------------------
[theme]
max_width = "56rem"
page_padding = "2rem"
radius = "0.375rem"
gap = "0.75rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#0a0a0a"
text_muted = "#737373"    # Subtitle, descriptions, footer
surface = "#ffffff"       # Cards
muted = "#f5f5f5"         # Code block, module rows
border = "#e5e5e5"
primary = "#171717"       # Module names

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#fafafa"
text_muted = "#a3a3a3"
surface = "#111111"
muted = "#262626"
border = "#262626"
primary = "#fafafa"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = |scheme: &ColorScheme, pad: &str| -> String {
        scheme
            .entries()
            .iter()
            .map(|(key, value)| format!("{pad}--color-{}: {value};", key.replace('_', "-")))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        ":root {{\n{light}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}",
        light = vars(&colors.light, "    "),
        dark = vars(&colors.dark, "        "),
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --page-max-width: {max_width};
    --page-padding: {page_padding};
    --radius: {radius};
    --row-gap: {gap};
}}"#,
        max_width = theme.max_width,
        page_padding = theme.page_padding,
        radius = theme.radius,
        gap = theme.gap,
    )
}
