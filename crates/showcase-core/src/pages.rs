use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Kind of content hosted by one full-viewport page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Title banner
    Splash,
    /// Character roster browser
    Characters,
    /// Closing credits
    Credits,
}

impl PageKind {
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Splash => "Intro",
            PageKind::Characters => "Characters",
            PageKind::Credits => "Credits",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Ordered, non-empty set of pages; fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<PageKind>,
}

impl PageSet {
    pub fn new(pages: Vec<PageKind>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyPageSet);
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PageKind> {
        self.pages.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PageKind> + '_ {
        self.pages.iter().copied()
    }
}
