//! # VMP Landing
//!
//! Static landing page for the VMP_Parser project (Vernacular Medical
//! Prescription Parser). The page shows the project title, a quick-start
//! transcript, and the six backend modules the project ships as Python
//! files. None of that backend lives here: this crate only renders the page.
//!
//! # Pipeline
//!
//! ```text
//! content::landing_page()  ─┐
//!                           ├─►  generate::render_page  ─►  dist/index.html
//! config.toml (optional)   ─┘
//! ```
//!
//! All page content is compile-time constant. Configuration only affects
//! where the page is written and how it is styled, so rendering is a pure
//! function of `(content, config)` and repeat builds produce identical bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The fixed page text and the six module descriptors |
//! | [`types`] | `ModuleDescriptor` and `Landing` |
//! | [`generate`] | Renders the HTML with Maud and writes the output directory |
//! | [`config`] | `config.toml` loading, merging, validation, and CSS generation |
//! | [`cache`] | Build manifest that skips rewriting unchanged output |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error, interpolation is auto-escaped (the module descriptions
//! contain `&`), and there is no template directory to ship.
//!
//! ## One Self-Contained File
//!
//! CSS is embedded at compile time and inlined into the page. No JavaScript
//! is emitted. The output opens straight from disk or any file server.

pub mod cache;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
