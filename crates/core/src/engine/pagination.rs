//! Offset/limit window over a list of results.

use serde::Serialize;

use super::types::EngineError;

/// The (offset, limit) range currently displayed.
///
/// `offset` only moves through [`next_page`](Self::next_page),
/// [`prev_page`](Self::prev_page) and [`reset`](Self::reset), so it stays a
/// multiple of `limit` for as long as the limit is unchanged.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    offset: u32,
    limit: u32,
}

impl PageWindow {
    /// Window at offset 0 with the given page size.
    pub fn new(limit: u32) -> Result<Self, EngineError> {
        if limit == 0 {
            return Err(EngineError::InvalidLimit(limit));
        }
        Ok(Self { offset: 0, limit })
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> u32 {
        self.offset / self.limit + 1
    }

    /// Advance one page. Does not check against the result size; the next
    /// cycle yields an empty slice when this overruns.
    pub fn next_page(&mut self) {
        self.offset = self.offset.saturating_add(self.limit);
    }

    /// Go back one page, stopping at 0.
    pub fn prev_page(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Change the page size. Resets the offset.
    pub fn set_limit(&mut self, limit: u32) -> Result<(), EngineError> {
        if limit == 0 {
            return Err(EngineError::InvalidLimit(limit));
        }
        self.limit = limit;
        self.offset = 0;
        Ok(())
    }
}

/// Elements visible in a window plus navigation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSlice<T> {
    pub slice: Vec<T>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Cut `window` out of a fully materialised `source`.
///
/// Used on the filtered path, where the whole intersection is known.
pub fn apply_window<T: Clone>(source: &[T], window: PageWindow) -> WindowSlice<T> {
    let start = (window.offset() as usize).min(source.len());
    let end = start.saturating_add(window.limit() as usize).min(source.len());
    let window_end = window.offset() as usize + window.limit() as usize;

    WindowSlice {
        slice: source[start..end].to_vec(),
        has_previous: window.offset() > 0,
        has_next: window_end < source.len(),
    }
}
