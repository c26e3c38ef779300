use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListViewIntent {
    SetSearch { text: String },
    ToggleSort,
    /// The pager reports both values together.
    ChangePage { page: usize, page_size: usize },
}

impl Intent for ListViewIntent {}
