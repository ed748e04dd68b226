//! Filtering, sorting and pagination over catalogue collections.
//!
//! Every listing goes through the same pipeline: the filters of a query are
//! applied as a conjunction over the whole collection, the survivors are
//! sorted once with a stable sort, then the requested page is sliced out.

mod error;
mod pagination;
mod recording;
mod search;
mod work;

pub use error::QueryError;
pub use pagination::{PageLimits, PageResult, Pagination, DEFAULT_MAX_PAGE_SIZE};
pub use recording::{RecordingEra, RecordingQuery, RecordingSort};
pub use search::SearchTerm;
pub(crate) use search::eq_ignore_case;
pub use work::{WorkQuery, WorkSort};

use std::cmp::Ordering;

pub trait CollectionQuery {
    type Item;

    fn matches(&self, item: &Self::Item) -> bool;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;
}

/// All items matching `query`, sorted.
pub fn filter<'a, Q, I>(items: I, query: &Q) -> Vec<&'a Q::Item>
where
    Q: CollectionQuery,
    Q::Item: 'a,
    I: IntoIterator<Item = &'a Q::Item>,
{
    let mut matches: Vec<&'a Q::Item> = items
        .into_iter()
        .filter(|item| query.matches(item))
        .collect();
    matches.sort_by(|a, b| query.compare(a, b));
    matches
}

pub fn execute<'a, Q, I>(items: I, query: &Q, pagination: Pagination) -> PageResult<'a, Q::Item>
where
    Q: CollectionQuery,
    Q::Item: 'a,
    I: IntoIterator<Item = &'a Q::Item>,
{
    PageResult::from_matches(filter(items, query), pagination)
}

/// Inclusive optional range check, items without a value never pass an
/// active bound.
fn within_years(value: Option<i32>, from: Option<i32>, to: Option<i32>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    match value {
        Some(year) => from.map_or(true, |f| year >= f) && to.map_or(true, |t| year <= t),
        None => false,
    }
}
