//! HTML page generation.
//!
//! Renders the landing page to a single self-contained HTML document and
//! writes it to the output directory.
//!
//! ## Page Layout
//!
//! ```text
//! div.page
//! ├── header.page-header      h1 title, p.subtitle
//! ├── section.card            "Quick Start": pre.quick-start
//! ├── section.card            "Generated Files": div.module-grid
//! │   └── div.module-row × 6  code.module-name + span.module-desc
//! └── p.footer
//! ```
//!
//! The page has no scripts and no interactive controls.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html              # The page (name from `output_file`)
//! ├── .build-manifest.json    # Hashes of written files
//! └── favicon.ico             # Anything under <source>/assets/, copied
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time. Color and layout custom
//! properties generated from config are prepended, and the result is inlined
//! in a `<style>` element.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped.

use crate::cache::{self, BuildManifest};
use crate::config::{self, SiteConfig, SiteMeta};
use crate::content;
use crate::types::{Landing, ModuleDescriptor};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Output directory {output} is inside the assets directory {assets}")]
    OutputInsideAssets { output: PathBuf, assets: PathBuf },
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Whether a generated file hit the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Identical content already on disk; left untouched.
    Unchanged,
}

/// Summary of a `generate` run, consumed by the CLI output formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Page filename relative to `output_dir`.
    pub page: String,
    pub page_status: WriteStatus,
    /// Number of files copied from the assets directory.
    pub assets_copied: usize,
}

/// Build the full stylesheet: config-driven custom properties, then base styles.
pub fn build_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Render the landing page to an HTML string.
pub fn render_html(landing: &Landing, config: &SiteConfig) -> String {
    render_page(landing, &config.site, &build_css(config)).into_string()
}

/// Write the landing page (and assets) into `output_dir`.
///
/// Assets are copied from `<source_dir>/<assets_dir>` before the page is
/// written, so an asset can never shadow the generated page. With
/// `use_cache`, an identical page already on disk is not rewritten.
pub fn generate(
    output_dir: &Path,
    source_dir: &Path,
    config: &SiteConfig,
    use_cache: bool,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets_copied = copy_assets(&source_dir.join(&config.assets_dir), output_dir)?;

    let page_html = render_html(&content::landing_page(), config);
    let hash = cache::hash_bytes(page_html.as_bytes());

    let mut manifest = if use_cache {
        BuildManifest::load(output_dir)
    } else {
        BuildManifest::empty()
    };

    let page_status = if manifest.is_fresh(&config.output_file, &hash, output_dir) {
        WriteStatus::Unchanged
    } else {
        fs::write(output_dir.join(&config.output_file), &page_html)?;
        WriteStatus::Written
    };

    manifest.insert(config.output_file.clone(), hash);
    manifest.save(output_dir)?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        page: config.output_file.clone(),
        page_status,
        assets_copied,
    })
}

/// Copy every file under `assets_dir` into `output_dir`, keeping the
/// relative layout. A missing assets directory copies nothing.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    // Copying into the assets tree would overwrite (and truncate) the sources
    let assets = assets_dir.canonicalize()?;
    let output = output_dir.canonicalize()?;
    if output.starts_with(&assets) {
        return Err(GenerateError::OutputInsideAssets { output, assets });
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(site: &SiteMeta, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.description);
                title { (site.page_title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a titled card section
fn card(title: &str, content: Markup) -> Markup {
    html! {
        section.card {
            div.card-header {
                h2.card-title { (title) }
            }
            div.card-content {
                (content)
            }
        }
    }
}

/// Renders one module descriptor: label and description side by side
fn module_row(module: &ModuleDescriptor) -> Markup {
    html! {
        div.module-row {
            code.module-name { (module.name) }
            span.module-desc { (module.desc) }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the landing page document.
pub fn render_page(landing: &Landing, site: &SiteMeta, css: &str) -> Markup {
    let content = html! {
        div.page {
            header.page-header {
                h1 { (landing.title) }
                p.subtitle { (landing.subtitle) }
            }
            (card(landing.quick_start_title, html! {
                pre.quick-start { (landing.quick_start) }
            }))
            (card(landing.files_title, html! {
                div.module-grid {
                    @for module in landing.modules {
                        (module_row(module))
                    }
                }
            }))
            p.footer { (landing.footer) }
        }
    };

    base_document(site, css, content)
}

// ============================================================================
// Tests
// ============================================================================
