use crate::quotes::error::QuoteError;
use std::collections::BTreeMap;
use std::fmt;

pub const OPEN_MARK: char = '“';
pub const CLOSE_MARK: char = '”';

/// Quotes every session starts with.
const BUILT_IN: &[&str] = &[
    "Winning doesn't always\nmean being first. Winning means you're doing better than you've done before",
    "The best way to get started is to quit talking and begin doing.",
    "Don't let yesterday take up too much of today.",
    "It's not whether you get knocked down, it's whether you get up.",
];

/// A stored quote. Always wrapped in quotation marks by [`Quote::wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote(String);

impl Quote {
    /// Trim `text` and wrap it in quotation marks. `None` if nothing is left.
    pub fn wrap(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(format!("{}{}{}", OPEN_MARK, trimmed, CLOSE_MARK)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text with every quotation mark glyph removed, as the editor shows it.
    pub fn unwrapped(&self) -> String {
        self.0
            .chars()
            .filter(|c| *c != OPEN_MARK && *c != CLOSE_MARK)
            .collect()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered quotes plus the like flags keyed by position.
///
/// The like map only holds indices that were toggled at least once. It is
/// not re-keyed by [`QuoteStore::delete_at`], so after a delete a flag can
/// end up describing whichever quote slid into its old position.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    likes: BTreeMap<usize, bool>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            likes: BTreeMap::new(),
        }
    }

    pub fn with_built_in() -> Self {
        let quotes = BUILT_IN.iter().filter_map(|text| Quote::wrap(text)).collect();
        Self {
            quotes,
            likes: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), QuoteError> {
        if index < self.quotes.len() {
            Ok(())
        } else {
            Err(QuoteError::IndexOutOfRange {
                index,
                len: self.quotes.len(),
            })
        }
    }

    /// Append a new quote and return its index.
    pub fn add(&mut self, text: &str) -> Result<usize, QuoteError> {
        let quote = Quote::wrap(text).ok_or(QuoteError::EmptyText)?;
        self.quotes.push(quote);
        Ok(self.quotes.len() - 1)
    }

    /// Replace the quote at `index` in place.
    pub fn edit_at(&mut self, index: usize, text: &str) -> Result<(), QuoteError> {
        self.check_index(index)?;
        let quote = Quote::wrap(text).ok_or(QuoteError::EmptyText)?;
        self.quotes[index] = quote;
        Ok(())
    }

    /// Remove the quote at `index`, shifting later quotes down by one.
    pub fn delete_at(&mut self, index: usize) -> Result<Quote, QuoteError> {
        self.check_index(index)?;
        Ok(self.quotes.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Quote, QuoteError> {
        self.quotes.get(index).ok_or(QuoteError::IndexOutOfRange {
            index,
            len: self.quotes.len(),
        })
    }

    pub fn all(&self) -> impl Iterator<Item = &Quote> + '_ {
        self.quotes.iter()
    }

    /// Flip the like flag at `index` and return the new value.
    pub fn toggle_like(&mut self, index: usize) -> Result<bool, QuoteError> {
        self.check_index(index)?;
        let liked = self.likes.entry(index).or_insert(false);
        *liked = !*liked;
        Ok(*liked)
    }

    pub fn is_liked(&self, index: usize) -> bool {
        self.likes.get(&index).copied().unwrap_or(false)
    }

    /// Liked positions that still hold a quote, in index order.
    pub fn liked(&self) -> impl Iterator<Item = (usize, &Quote)> + '_ {
        self.likes
            .iter()
            .filter(|(_, liked)| **liked)
            .filter_map(|(&index, _)| self.quotes.get(index).map(|q| (index, q)))
    }

    pub fn liked_count(&self) -> usize {
        self.liked().count()
    }
}
