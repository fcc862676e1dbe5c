//! Client-side pagination over a fully fetched result set.
//!
//! The page count is `floor(len / rows)` but never below three, and changing
//! the page size keeps the current page even if it falls past the new end.
//! The three numbered buttons use a sliding-window label heuristic rather than
//! exact page math; see [`Pager::page_number_display`].

use std::ops::Range;

use abi::RowsCount;

/// Distance from the edges at which the numbered buttons stop sliding.
pub const DELTA: usize = 2;
pub const MIN_TOTAL_PAGES: usize = 3;

pub fn total_pages(len: usize, rows_count: RowsCount) -> usize {
    (len / rows_count.get()).max(MIN_TOTAL_PAGES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub label: isize,
    /// Page a click moves to; `None` when the button does nothing.
    pub target: Option<usize>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Pager<T> {
    original: Vec<T>,
    visible: Vec<T>,
    rows_count: RowsCount,
    current_page: usize,
    total_pages: usize,
}

impl<T: Clone> Pager<T> {
    pub fn new(rows_count: RowsCount) -> Self {
        Self {
            original: Vec::new(),
            visible: Vec::new(),
            rows_count,
            current_page: 1,
            total_pages: 0,
        }
    }

    /// Takes ownership of the fetched set and shows its first page. The
    /// current page is left untouched.
    pub fn initialize(&mut self, data: Vec<T>) {
        self.total_pages = total_pages(data.len(), self.rows_count);
        let end = self.rows_count.get().min(data.len());
        self.visible = data[..end].to_vec();
        self.original = data;
    }

    pub fn change_page(&mut self, page: usize) {
        self.current_page = page;
        self.refresh();
    }

    pub fn change_rows_count(&mut self, rows_count: RowsCount) {
        self.total_pages = total_pages(self.original.len(), rows_count);
        self.rows_count = rows_count;
        self.refresh();
    }

    /// Bounds of the current page within the full set, clamped like a slice
    /// that runs off the end. Page 0 is empty.
    pub fn window(&self) -> Range<usize> {
        if self.current_page == 0 {
            return 0..0;
        }
        let rows = self.rows_count.get();
        let len = self.original.len();
        let start = (self.current_page - 1) * rows;
        let end = start + rows;
        start.min(len)..end.min(len)
    }

    fn refresh(&mut self) {
        self.visible = self.original[self.window()].to_vec();
    }
}

impl<T> Pager<T> {
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn original(&self) -> &[T] {
        &self.original
    }

    pub fn rows_count(&self) -> RowsCount {
        self.rows_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Target of the "Previous" control, `None` when disabled.
    pub fn prev_page(&self) -> Option<usize> {
        self.has_prev().then(|| self.current_page - 1)
    }

    /// Target of the "Next" control, `None` when disabled.
    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Picks the label of one numbered button: `start` while the current
    /// page is within `DELTA` of the first page, `current` in the middle, and
    /// `end` once the current page is within `DELTA` of the last.
    pub fn page_number_display(&self, start: isize, current: isize, end: isize) -> isize {
        let current_page = self.current_page as isize;
        let not_near_end = self.total_pages as isize - DELTA as isize >= current_page;
        if not_near_end {
            if current_page <= DELTA as isize {
                return start;
            }
            return current;
        }
        end
    }

    pub fn page_buttons(&self) -> [PageButton; 3] {
        let cur = self.current_page as isize;
        let total = self.total_pages as isize;
        let back = self.current_page.checked_sub(1);
        let forward = Some(self.current_page + 1);
        let (has_prev, has_next) = (self.has_prev(), self.has_next());

        let middle_target = if !has_next {
            back
        } else if !has_prev {
            forward
        } else {
            None
        };

        [
            PageButton {
                label: self.page_number_display(1, cur - 1, total - DELTA as isize),
                target: back,
                active: !has_prev,
            },
            PageButton {
                label: self.page_number_display(2, cur, total - 1),
                target: middle_target,
                active: has_prev && has_next,
            },
            PageButton {
                label: self.page_number_display(3, cur + 1, total),
                target: forward,
                active: !has_next,
            },
        ]
    }
}
