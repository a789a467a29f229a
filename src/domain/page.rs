use std::fmt;

use serde::Serialize;

/// A single page of an opened document. Bitmaps are rendered on demand by the
/// page source, so only the embedded text layer is carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub embedded_text: Option<String>,
}

impl Page {
    pub fn new(index: usize, embedded_text: Option<String>) -> Self {
        Self {
            index,
            embedded_text,
        }
    }

    /// Embedded text that carries at least one non-whitespace character.
    pub fn usable_embedded_text(&self) -> Option<&str> {
        self.embedded_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Embedded,
    Ocr,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Ocr => "ocr",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    pub page_index: usize,
    pub method: ExtractionMethod,
    pub text: String,
}

impl PageText {
    pub fn new(page_index: usize, method: ExtractionMethod, text: String) -> Self {
        Self {
            page_index,
            method,
            text,
        }
    }

    pub fn marker(&self) -> String {
        format!("--- Page {} ({}) ---", self.page_index, self.method)
    }
}
