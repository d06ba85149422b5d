//! Reducer for the filtered, paginated list pages.
//!
//! Every list page (directory, recruitment queue, leave queue) is the same
//! machine: rows from the last read, a status tab, column filters, a page
//! cursor and an optional selected record with a transition in flight.

use std::borrow::Cow;

use crate::{
    filters::{filter_rows, ColumnFilters, Filterable, StatusTab},
    models::{Employee, LeaveRequest, RecruitmentApplication},
    pagination::{paginate, total_pages, Page},
};

/// Stable key of a row within its list.
pub trait RowKey {
    fn row_key(&self) -> Cow<'_, str>;
}

impl RowKey for Employee {
    fn row_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

impl RowKey for RecruitmentApplication {
    fn row_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

impl RowKey for LeaveRequest {
    fn row_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.request_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState<R> {
    pub rows: Vec<R>,
    pub tab: StatusTab,
    pub filters: ColumnFilters,
    pub page: usize,
    pub per_page: usize,
    pub selected: Option<String>,
    pub load: LoadState,
    /// A transition is in flight; its controls stay disabled until it resolves.
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// The last transition succeeded and the rows must be read again.
    pub needs_reload: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableAction<R> {
    Loaded(Vec<R>),
    LoadFailed(String),
    SelectTab(StatusTab),
    SetFilter { column: String, needle: String },
    ClearFilters,
    GoToPage(usize),
    Select(String),
    ClearSelection,
    TransitionStarted,
    TransitionSucceeded(String),
    TransitionFailed(String),
}

impl<R> TableState<R> {
    pub fn new(per_page: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab: StatusTab::All,
            filters: ColumnFilters::new(),
            page: 1,
            per_page: per_page.max(1),
            selected: None,
            load: LoadState::Loading,
            busy: false,
            error: None,
            notice: None,
            needs_reload: false,
        }
    }

    pub fn with_tab(mut self, tab: StatusTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn controls_enabled(&self) -> bool {
        !self.busy && self.load == LoadState::Ready
    }
}

impl<R: Filterable + RowKey + Clone> TableState<R> {
    pub fn filtered(&self) -> Vec<R> {
        filter_rows(&self.rows, &self.tab, &self.filters)
    }

    /// The rows the page shows right now.
    pub fn visible(&self) -> Page<R> {
        paginate(&self.filtered(), self.page, self.per_page)
    }

    pub fn page_count(&self) -> usize {
        total_pages(self.filtered().len(), self.per_page)
    }

    pub fn selected_row(&self) -> Option<&R> {
        let key = self.selected.as_deref()?;
        self.rows.iter().find(|row| row.row_key() == key)
    }
}

pub fn reduce<R>(mut state: TableState<R>, action: TableAction<R>) -> TableState<R>
where
    R: Filterable + RowKey + Clone,
{
    match action {
        TableAction::Loaded(rows) => {
            state.rows = rows;
            state.load = LoadState::Ready;
            state.needs_reload = false;
            if state.selected_row().is_none() {
                state.selected = None;
            }
            state.page = state.page.min(state.page_count()).max(1);
        }
        TableAction::LoadFailed(message) => {
            state.load = LoadState::Failed(message);
            state.needs_reload = false;
        }
        TableAction::SelectTab(tab) => {
            state.tab = tab;
            state.page = 1;
        }
        TableAction::SetFilter { column, needle } => {
            state.filters.set(column, needle);
            state.page = 1;
        }
        TableAction::ClearFilters => {
            state.filters = ColumnFilters::new();
            state.page = 1;
        }
        TableAction::GoToPage(page) => {
            if page >= 1 && page <= state.page_count().max(1) {
                state.page = page;
            }
        }
        TableAction::Select(key) => {
            if !state.busy && state.rows.iter().any(|row| row.row_key() == key) {
                state.selected = Some(key);
                state.error = None;
                state.notice = None;
            }
        }
        TableAction::ClearSelection => {
            if !state.busy {
                state.selected = None;
            }
        }
        TableAction::TransitionStarted => {
            if !state.busy {
                state.busy = true;
                state.error = None;
                state.notice = None;
            }
        }
        TableAction::TransitionSucceeded(message) => {
            state.busy = false;
            state.selected = None;
            state.notice = Some(message);
            state.needs_reload = true;
        }
        TableAction::TransitionFailed(message) => {
            state.busy = false;
            state.error = Some(message);
        }
    }
    state
}
