//! Transient per-view state: rows, sort, selection, and in-flight requests.
//!
//! A page never mutates its rows; every mutation goes through the API and
//! comes back as a fresh fetch. Completed fetches are applied in the order
//! they are observed, so a request issued earlier but resolved later wins
//! (last-resolved-wins, an accepted race).

use crate::api::{ApiError, ListQuery, Page};
use crate::fetch::FetchHandle;
use crate::state::EventLog;

/// Sort direction reflected in the header indicator and sent to the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Transient state for one list view.
pub struct PageState<T> {
    /// Rows as last fetched. Replaced wholesale on every completed fetch.
    pub rows: Vec<T>,

    /// Index of the selected row.
    pub selected: usize,

    /// First visible row index (vertical scroll).
    pub offset: usize,

    /// Whether a fetch is in flight.
    pub loading: bool,

    /// Page-level error shown as a blocking banner.
    pub error: Option<String>,

    /// Field the list is currently sorted by, if any.
    pub sort_field: Option<&'static str>,

    /// Direction for `sort_field`.
    pub sort_order: SortOrder,

    /// Current page number (1-based).
    pub page: u32,

    /// Total row count reported by the backend.
    pub total: Option<u64>,

    /// Total page count reported by the backend.
    pub pages: Option<u32>,

    handles: Vec<FetchHandle<Page<T>>>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageState<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            offset: 0,
            loading: false,
            error: None,
            sort_field: None,
            sort_order: SortOrder::Asc,
            page: 1,
            total: None,
            pages: None,
            handles: Vec::new(),
        }
    }

    /// Track a newly issued fetch. Clears the error banner so the loading
    /// state is visible; prior in-flight requests are left to race.
    pub fn begin(&mut self, handle: FetchHandle<Page<T>>) {
        self.loading = true;
        self.error = None;
        self.handles.push(handle);
    }

    /// Whether this page has never completed a fetch.
    pub fn is_unloaded(&self) -> bool {
        self.rows.is_empty() && self.total.is_none() && self.error.is_none() && !self.loading
    }

    /// Apply any completed fetches. Returns true if state changed.
    pub fn poll(&mut self, log: &EventLog, resource: &str) -> bool {
        let mut changed = false;
        let mut i = 0;
        while i < self.handles.len() {
            match self.handles[i].try_recv() {
                Some(result) => {
                    let handle = self.handles.remove(i);
                    if let Err(error) = &result {
                        log.log_fetch_failed(resource, &error.to_string(), handle.request_id);
                    }
                    self.apply(result);
                    changed = true;
                }
                None => i += 1,
            }
        }
        changed
    }

    fn apply(&mut self, result: Result<Page<T>, ApiError>) {
        match result {
            Ok(page) => {
                self.rows = page.rows;
                if let Some(pagination) = page.pagination {
                    self.page = pagination.page.max(1);
                    self.total = Some(pagination.total);
                    self.pages = Some(pagination.pages);
                }
                self.error = None;
                if self.selected >= self.rows.len() {
                    self.selected = self.rows.len().saturating_sub(1);
                }
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
        self.loading = !self.handles.is_empty();
    }

    /// Header click / sort key: same field flips direction, a new field
    /// starts ascending. The caller re-fetches; this only owns the state.
    pub fn toggle_sort(&mut self, field: &'static str) {
        if self.sort_field == Some(field) {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = Some(field);
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Query parameters reflecting the current page and sort.
    pub fn query(&self, limit: u32) -> ListQuery {
        ListQuery {
            page: self.page,
            limit,
            sort: self.sort_field,
            order: self.sort_field.map(|_| self.sort_order.as_str()),
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.rows.get(self.selected)
    }

    /// Keep the selection inside the rendered window of `visible` rows.
    pub fn scroll_to_selected(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    /// Move to the next page if the backend reported more.
    pub fn next_page(&mut self) -> bool {
        match self.pages {
            Some(pages) if self.page < pages => {
                self.page += 1;
                true
            }
            _ => false,
        }
    }

    /// Move to the previous page.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}
