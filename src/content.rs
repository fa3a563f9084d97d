//! The fixed landing page content.
//!
//! The module list names the files of the VMP_Parser Python backend. None of
//! that backend lives in this crate; the names are display labels only.

use crate::types::{Landing, ModuleDescriptor};

pub const TITLE: &str = "💊 VMP_Parser";

pub const SUBTITLE: &str =
    "Vernacular Medical Prescription Parser — all Python backend files have been generated.";

pub const QUICK_START_TITLE: &str = "🚀 Quick Start";

/// Instructional transcript. Rendered character-for-character.
pub const QUICK_START: &str = "# Install dependencies
pip install -r VMP_Parser/backend/requirements.txt

# Add your Gemini API key to VMP_Parser/.env

# Run the app
cd VMP_Parser
streamlit run backend/app.py";

pub const FILES_TITLE: &str = "📁 Generated Files";

pub const FOOTER: &str =
    "Download the VMP_Parser folder and run locally with Python 3.9+ and Tesseract OCR.";

pub const MODULES: [ModuleDescriptor; 6] = [
    ModuleDescriptor {
        name: "ocr.py",
        desc: "Image preprocessing & Tesseract text extraction",
    },
    ModuleDescriptor {
        name: "parser.py",
        desc: "Abbreviation expansion, dosage/frequency parsing",
    },
    ModuleDescriptor {
        name: "llm.py",
        desc: "Gemini-powered prescription simplification",
    },
    ModuleDescriptor {
        name: "translator.py",
        desc: "Multi-language translation (EN, TE, HI)",
    },
    ModuleDescriptor {
        name: "tts.py",
        desc: "gTTS audio generation",
    },
    ModuleDescriptor {
        name: "utils.py",
        desc: "Helper functions for text cleaning & file ops",
    },
];

/// Assemble the landing page. Pure: every call returns the same document.
pub fn landing_page() -> Landing {
    Landing {
        title: TITLE,
        subtitle: SUBTITLE,
        quick_start_title: QUICK_START_TITLE,
        quick_start: QUICK_START,
        files_title: FILES_TITLE,
        modules: &MODULES,
        footer: FOOTER,
    }
}
