use crate::mvi::State;
use crate::view::projection::{SortOrder, ViewQuery};

pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 8, 20];

/// Search, sort and paging controls of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub search: String,
    pub order: SortOrder,
    pub page: usize,
    pub page_size: usize,
    /// Page sizes the user may pick from.
    pub page_size_options: Vec<usize>,
}

impl State for ListViewState {}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl ListViewState {
    pub fn new(page_size: usize, page_size_options: Vec<usize>) -> Self {
        Self {
            search: String::new(),
            order: SortOrder::Ascending,
            page: 1,
            page_size,
            page_size_options,
        }
    }

    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone(),
            order: self.order,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
