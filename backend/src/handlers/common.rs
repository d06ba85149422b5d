use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::{
    error::AppError,
    filters::{ColumnFilters, Filterable, StatusTab},
    pagination::{paginate, Page, MAX_PER_PAGE},
    state::AppState,
    utils::time::today_local,
};

const RESERVED_KEYS: [&str; 3] = ["tab", "page", "per_page"];

/// Tab, column filters and page cursor taken from a list query string.
/// Any key other than `tab`, `page` and `per_page` names a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub tab: StatusTab,
    pub filters: ColumnFilters,
    pub page: usize,
    pub per_page: usize,
}

impl ListQuery {
    pub fn parse<R: Filterable>(
        params: &HashMap<String, String>,
        default_tab: StatusTab,
        default_per_page: usize,
    ) -> Result<Self, AppError> {
        let tab = params
            .get("tab")
            .map(|raw| StatusTab::parse(raw))
            .unwrap_or(default_tab);
        let page = parse_positive(params.get("page"), "page")?.unwrap_or(1);
        let per_page = parse_positive(params.get("per_page"), "per_page")?
            .unwrap_or(default_per_page)
            .min(MAX_PER_PAGE);

        let mut filters = ColumnFilters::new();
        for (column, needle) in params {
            if RESERVED_KEYS.contains(&column.as_str()) {
                continue;
            }
            if !R::COLUMNS.contains(&column.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Unknown filter column: {}",
                    column
                )));
            }
            filters.set(column.clone(), needle.clone());
        }

        Ok(Self {
            tab,
            filters,
            page,
            per_page,
        })
    }

    pub fn apply<R: Filterable + Clone>(&self, rows: &[R]) -> Page<R> {
        let filtered = crate::filters::filter_rows(rows, &self.tab, &self.filters);
        paginate(&filtered, self.page, self.per_page)
    }
}

fn parse_positive(raw: Option<&String>, name: &str) -> Result<Option<usize>, AppError> {
    match raw.map(|value| value.trim()) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Some(n)),
            _ => Err(AppError::BadRequest(format!(
                "`{}` must be a positive integer",
                name
            ))),
        },
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T, S> {
    #[serde(flatten)]
    pub page: Page<T>,
    pub tab: String,
    pub filters: BTreeMap<String, String>,
    pub summary: S,
}

impl<T, S> ListResponse<T, S> {
    pub fn new(query: &ListQuery, page: Page<T>, summary: S) -> Self {
        Self {
            page,
            tab: query.tab.label().to_string(),
            filters: query
                .filters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            summary,
        }
    }
}

/// Year used for "new this year" counters.
pub fn current_year(state: &AppState) -> i32 {
    today_local(&state.config.time_zone).year()
}
