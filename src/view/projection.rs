//! Filter → sort → paginate over the in-memory user list.
//!
//! [`project`] is pure: identical inputs always give identical output, and
//! the reported total never depends on the requested page.

use feruca::Collator;

use crate::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Asc",
            SortOrder::Descending => "Desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub order: SortOrder,
    /// 1-based; `0` is read as `1`.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            order: SortOrder::Ascending,
            page: 1,
            page_size: super::state::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    /// Users on the requested page, in display order.
    pub items: Vec<&'a User>,
    /// Users matching the search, across all pages.
    pub total: usize,
}

impl Projection<'_> {
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size)
    }
}

pub fn project<'a>(users: &'a [User], query: &ViewQuery) -> Projection<'a> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<(String, &User)> = users
        .iter()
        .filter(|u| matches_search(u, &needle))
        .map(|u| (u.name.to_lowercase(), u))
        .collect();

    // Unicode Collation Algorithm with the CLDR root tailoring, so accented
    // and non-Latin initials sort next to their base letters. sort_by is
    // stable, so equal names keep their filtered order either way.
    let mut collator = Collator::default();
    matched.sort_by(|(a, _), (b, _)| match query.order {
        SortOrder::Ascending => collator.collate(a.as_str(), b.as_str()),
        SortOrder::Descending => collator.collate(b.as_str(), a.as_str()),
    });

    let total = matched.len();
    let start = query.page.max(1).saturating_sub(1).saturating_mul(query.page_size);
    let items = matched
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .map(|(_, u)| u)
        .collect();

    Projection { items, total }
}

fn matches_search(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle)
}
