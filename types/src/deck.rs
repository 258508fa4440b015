//! The page deck: the ordered, read-only sequence of pages the book flips.

use thiserror::Error;

/// A single page of the book: a title line and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    body: Vec<String>,
}

impl Page {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            title: title.into(),
            body: body.lines().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }
}

/// Error building a deck.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A book needs at least two pages for navigation to mean anything.
    #[error("a deck needs at least 2 pages, got {0}")]
    TooFewPages(usize),
}

/// An ordered, index-addressed sequence of pages.
///
/// Read-only after construction; the paginator only ever reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pages: Vec<Page>,
}

impl Deck {
    pub fn new(pages: Vec<Page>) -> Result<Self, DeckError> {
        if pages.len() < 2 {
            return Err(DeckError::TooFewPages(pages.len()));
        }
        Ok(Self { pages })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // A valid deck is never empty; kept for API symmetry with len().
        self.pages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}
