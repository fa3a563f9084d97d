//! Page data types.
//!
//! Everything the landing page displays is one of these two types. They hold
//! `&'static str` because all content is fixed at compile time; `Serialize`
//! lets `render --format json` dump the page data.

use serde::Serialize;

/// A static `(name, description)` pair shown as one row in the module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Short filename-like label, e.g. `ocr.py`.
    pub name: &'static str,
    /// Human-readable description shown next to the label.
    pub desc: &'static str,
}

/// The complete landing page document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub quick_start_title: &'static str,
    /// Shell transcript displayed verbatim, never executed.
    pub quick_start: &'static str,
    pub files_title: &'static str,
    /// Display order is list order.
    pub modules: &'static [ModuleDescriptor],
    pub footer: &'static str,
}
