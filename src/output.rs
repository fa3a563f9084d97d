//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects, except
//! [`format_check_output`], which only probes for file existence.
//!
//! # Output Format
//!
//! ## Render (text)
//!
//! ```text
//! 💊 VMP_Parser
//! Vernacular Medical Prescription Parser — all Python backend files have been generated.
//!
//! 🚀 Quick Start
//!     # Install dependencies
//!     pip install -r VMP_Parser/backend/requirements.txt
//!     ...
//!
//! 📁 Generated Files
//!     001 ocr.py: Image preprocessing & Tesseract text extraction
//!     ...
//!
//! Download the VMP_Parser folder and run locally with Python 3.9+ and Tesseract OCR.
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html: written
//! Assets: 2 files copied
//! Site generated at dist
//! ```

use crate::config::SiteConfig;
use crate::generate::{GenerateReport, WriteStatus};
use crate::types::Landing;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format the landing page as plain text for a terminal.
///
/// Blank lines inside the quick start block are kept blank rather than
/// indented.
pub fn format_page_text(landing: &Landing) -> Vec<String> {
    let mut lines = vec![
        landing.title.to_string(),
        landing.subtitle.to_string(),
        String::new(),
        landing.quick_start_title.to_string(),
    ];

    for line in landing.quick_start.lines() {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{}", indent(1), line));
        }
    }

    lines.push(String::new());
    lines.push(landing.files_title.to_string());
    for (i, module) in landing.modules.iter().enumerate() {
        lines.push(format!(
            "{}{} {}: {}",
            indent(1),
            format_index(i + 1),
            module.name,
            module.desc
        ));
    }

    lines.push(String::new());
    lines.push(landing.footer.to_string());
    lines
}

pub fn print_page_text(landing: &Landing) {
    for line in format_page_text(landing) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a `generate` run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let status = match report.page_status {
        WriteStatus::Written => "written",
        WriteStatus::Unchanged => "unchanged",
    };
    let mut lines = vec![format!("{}: {}", report.page, status)];
    if report.assets_copied > 0 {
        lines.push(format!(
            "Assets: {} copied",
            plural(report.assets_copied, "file")
        ));
    }
    lines.push(format!("Site generated at {}", report.output_dir.display()));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format what `check` found in the source directory.
pub fn format_check_output(config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Config".to_string()];
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    if source_root.join(&config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), config.assets_dir));
    }
    lines.push(String::new());
    lines.push("Output".to_string());
    lines.push(format!("{}{}", indent(1), config.output_file));
    lines
}

pub fn print_check_output(config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(config, source_root) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, landing_page};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn page_text_lists_modules_in_order() {
        let lines = format_page_text(&landing_page());
        let rows: Vec<&String> = lines.iter().filter(|l| l.starts_with("    0")).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[0],
            "    001 ocr.py: Image preprocessing & Tesseract text extraction"
        );
        assert_eq!(
            rows[5],
            "    006 utils.py: Helper functions for text cleaning & file ops"
        );
    }

    #[test]
    fn page_text_keeps_quick_start_lines() {
        let lines = format_page_text(&landing_page());
        let start = lines
            .iter()
            .position(|l| l == content::QUICK_START_TITLE)
            .unwrap();
        let block: Vec<String> = lines[start + 1..start + 9]
            .iter()
            .map(|l| l.strip_prefix("    ").unwrap_or(l).to_string())
            .collect();
        assert_eq!(block.join("\n"), content::QUICK_START);
    }

    #[test]
    fn page_text_frames_with_title_and_footer() {
        let lines = format_page_text(&landing_page());
        assert_eq!(lines.first().unwrap(), content::TITLE);
        assert_eq!(lines.last().unwrap(), content::FOOTER);
    }

    fn report(status: WriteStatus, assets: usize) -> GenerateReport {
        GenerateReport {
            output_dir: PathBuf::from("dist"),
            page: "index.html".to_string(),
            page_status: status,
            assets_copied: assets,
        }
    }

    #[test]
    fn generate_output_written() {
        let lines = format_generate_output(&report(WriteStatus::Written, 0));
        assert_eq!(lines, vec!["index.html: written", "Site generated at dist"]);
    }

    #[test]
    fn generate_output_unchanged_with_assets() {
        let lines = format_generate_output(&report(WriteStatus::Unchanged, 1));
        assert_eq!(lines[0], "index.html: unchanged");
        assert_eq!(lines[1], "Assets: 1 file copied");

        let lines = format_generate_output(&report(WriteStatus::Written, 3));
        assert_eq!(lines[1], "Assets: 3 files copied");
    }

    #[test]
    fn check_output_without_config() {
        let tmp = TempDir::new().unwrap();
        let lines = format_check_output(&SiteConfig::default(), tmp.path());
        assert!(lines.contains(&"    (stock defaults)".to_string()));
        assert!(!lines.contains(&"    assets/".to_string()));
        assert_eq!(lines.last().unwrap(), "    index.html");
    }

    #[test]
    fn check_output_with_config_and_assets() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "").unwrap();
        std::fs::create_dir(tmp.path().join("assets")).unwrap();
        let lines = format_check_output(&SiteConfig::default(), tmp.path());
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }
}
