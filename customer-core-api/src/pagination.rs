use serde::{Deserialize, Serialize};

/// Offset pagination parameters, used for history listings.
///
/// # Example
/// ```
/// use customer_core_api::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0);
/// let third = PageRequest::for_page(20, 3);
/// assert_eq!(third.offset, 40);
/// assert_eq!(first.page_number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Request for a 1-based page number; page 0 is treated as page 1.
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of an offset-paginated listing, with the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Cursor pagination parameters for the customer scroll listing.
///
/// `cursor` is the id of the last item the caller has seen (0 means from
/// the start), `limit` caps the page size (0 yields no rows) and `key` is
/// matched as a substring of fullname or company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub cursor: i64,
    pub limit: i64,
    pub key: String,
}

impl ScrollRequest {
    /// Negative cursor and limit values are clamped to 0.
    pub fn new(cursor: i64, limit: i64, key: impl Into<String>) -> Self {
        Self {
            cursor: cursor.max(0),
            limit: limit.max(0),
            key: key.into(),
        }
    }

    /// Build a request from raw `lastID`, `limit` and `key` query values.
    ///
    /// Numbers are read from their leading integer, so `12abc` is 12 and
    /// `5.0` is 5. Missing values or values without leading digits become 0,
    /// and a missing key matches everything.
    pub fn from_query(last_id: Option<&str>, limit: Option<&str>, key: Option<&str>) -> Self {
        Self::new(
            leading_int(last_id),
            leading_int(limit),
            key.unwrap_or_default(),
        )
    }

    /// Whether the id restriction applies.
    pub fn has_cursor(&self) -> bool {
        self.cursor >= 1
    }
}

/// Optional sign and digits after leading whitespace; the rest is ignored.
/// Saturates at the i64 range.
fn leading_int(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let value = value.trim_start();
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// One page of the customer scroll listing.
///
/// `has_more` is true whenever the page is full; it does not check that a
/// further row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPage<T> {
    #[serde(rename = "datas")]
    pub items: Vec<T>,
    #[serde(rename = "lastID")]
    pub next_cursor: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl<T> ScrollPage<T> {
    pub fn from_items(items: Vec<T>, limit: i64, id_of: impl Fn(&T) -> i64) -> Self {
        let next_cursor = items.last().map(id_of).unwrap_or(0);
        let has_more = items.len() as i64 >= limit;
        Self {
            items,
            next_cursor,
            has_more,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ScrollPage<U> {
        ScrollPage {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        }
    }
}
