use super::QueryError;

pub const DEFAULT_MAX_PAGE_SIZE: usize = 500;

/// Page size bounds for one kind of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl PageLimits {
    pub const WORKS: PageLimits = PageLimits {
        default_size: 50,
        max_size: DEFAULT_MAX_PAGE_SIZE,
    };

    pub const RECORDINGS: PageLimits = PageLimits {
        default_size: 20,
        max_size: DEFAULT_MAX_PAGE_SIZE,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Pages are 1-based, anything below 1 is treated as the first page.
    /// A page size of 0 or above the limit is rejected.
    pub fn new(
        page: Option<i64>,
        page_size: Option<i64>,
        limits: PageLimits,
    ) -> Result<Pagination, QueryError> {
        let page = page.unwrap_or(1).max(1) as usize;
        let page_size = match page_size {
            None => limits.default_size,
            Some(size) if size < 1 => {
                return Err(QueryError::InvalidQuery(format!(
                    "Page size must be positive, got {}",
                    size
                )))
            }
            Some(size) if size as u64 > limits.max_size as u64 => {
                return Err(QueryError::InvalidQuery(format!(
                    "Page size must not exceed {}, got {}",
                    limits.max_size, size
                )))
            }
            Some(size) => size as usize,
        };
        Ok(Pagination { page, page_size })
    }

    /// The first `size` matches, used for capped result sections.
    pub fn first(size: usize) -> Pagination {
        Pagination {
            page: 1,
            page_size: size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of a filtered and sorted collection.
#[derive(Debug)]
pub struct PageResult<'a, T> {
    pub items: Vec<&'a T>,
    pub total_matched: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<'a, T> PageResult<'a, T> {
    pub fn from_matches(matches: Vec<&'a T>, pagination: Pagination) -> PageResult<'a, T> {
        let total_matched = matches.len();
        let page_size = pagination.page_size();
        let items = matches
            .into_iter()
            .skip(pagination.offset())
            .take(page_size)
            .collect();
        PageResult {
            items,
            total_matched,
            page: pagination.page(),
            page_size,
            total_pages: total_matched.div_ceil(page_size),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
