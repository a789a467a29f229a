use std::fmt;

use super::page::{ExtractionMethod, PageText};

/// Recovered text of a whole document, one block per page in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText {
    blocks: Vec<PageText>,
}

impl DocumentText {
    pub fn new(blocks: Vec<PageText>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[PageText] {
        &self.blocks
    }

    pub fn page_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn count_by_method(&self, method: ExtractionMethod) -> usize {
        self.blocks.iter().filter(|b| b.method == method).count()
    }

    /// Concatenated text with a provenance marker ahead of every page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&block.marker());
            out.push('\n');
            out.push_str(&block.text);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
