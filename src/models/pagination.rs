use serde::{Deserialize, Serialize};

// ── Query parameters ──────────────────────────────────────────────────────────

/// Raw `page` / `per_page` query values. Kept as strings so that garbage
/// input falls back to defaults rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    pub fn resolve(&self, default_per_page: i64) -> PageRequest {
        PageRequest {
            page: parse_positive(self.page.as_deref()).unwrap_or(1),
            per_page: parse_positive(self.per_page.as_deref()).unwrap_or(default_per_page),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).filter(|n| *n >= 1)
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

// ── Response metadata ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    /// `pages` is never below 1, even for an empty table.
    pub fn new(request: PageRequest, total: i64) -> Self {
        let per_page = request.per_page.max(1);
        let pages = total / per_page + i64::from(total % per_page != 0);
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            pages: pages.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, per_page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
        }
    }

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(
            params(None, None).resolve(10),
            PageRequest { page: 1, per_page: 10 }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        assert_eq!(
            params(Some("abc"), Some("-5")).resolve(10),
            PageRequest { page: 1, per_page: 10 }
        );
        assert_eq!(
            params(Some("0"), Some("0")).resolve(7),
            PageRequest { page: 1, per_page: 7 }
        );
    }

    #[test]
    fn explicit_values_are_used() {
        let req = params(Some("3"), Some("20")).resolve(10);
        assert_eq!(req, PageRequest { page: 3, per_page: 20 });
        assert_eq!(req.offset(), 40);
    }

    #[test]
    fn first_page_has_zero_offset() {
        assert_eq!(PageRequest { page: 1, per_page: 50 }.offset(), 0);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let req = PageRequest { page: i64::MAX, per_page: 1000 };
        assert_eq!(req.offset(), i64::MAX);
    }

    #[test]
    fn page_count_rounds_up() {
        let req = PageRequest { page: 1, per_page: 10 };
        assert_eq!(Pagination::new(req, 0).pages, 1);
        assert_eq!(Pagination::new(req, 1).pages, 1);
        assert_eq!(Pagination::new(req, 10).pages, 1);
        assert_eq!(Pagination::new(req, 11).pages, 2);
        assert_eq!(Pagination::new(req, 95).pages, 10);
        let huge = PageRequest { page: 1, per_page: i64::MAX };
        assert_eq!(Pagination::new(huge, 3).pages, 1);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let p = Pagination::new(PageRequest { page: 1, per_page: 0 }, 3);
        assert_eq!(p.pages, 3);
    }

    #[test]
    fn metadata_echoes_request() {
        let p = Pagination::new(PageRequest { page: 2, per_page: 5 }, 12);
        assert_eq!(p, Pagination { page: 2, per_page: 5, total: 12, pages: 3 });
    }
}
