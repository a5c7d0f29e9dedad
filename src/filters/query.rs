use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Fixed page size for the alerts list.
pub const PAGE_SIZE: u32 = 50;

// Everything except unreserved characters is percent-encoded in query values.
const QUERY_VALUE: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Transient client-side filter state for the alerts list.
///
/// Not persisted; an explicit reset (or a fresh page view) restores the
/// defaults. Empty strings mean "no constraint", matching the form fields
/// they mirror.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub vendor: String,
    pub product: String,
    pub bio_relevance: String,
    pub kev_only: bool,
    pub search: String,
    pub date_from: String,
    pub date_to: String,
}

impl FilterSet {
    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = FilterSet::default();
    }
}

/// A fully specified alerts request: filters plus pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertQuery {
    pub page: u32,
    pub per_page: u32,
    pub filters: FilterSet,
}

impl AlertQuery {
    /// Page `page` of the list under the given filters, at the fixed page size.
    pub fn new(page: u32, filters: &FilterSet) -> Self {
        Self { page, per_page: PAGE_SIZE, filters: filters.clone() }
    }

    /// Exact-identifier lookup used by the detail viewer: free-text search for
    /// the CVE id with a page size of one.
    pub fn lookup(cve_id: &str) -> Self {
        let filters = FilterSet { search: cve_id.to_string(), ..FilterSet::default() };
        Self { page: 1, per_page: 1, filters }
    }

    /// Encode the query string in the fixed field order the server logs
    /// expect. Every key is always present and `kev_only` is literal
    /// `true`/`false`, so the output is byte-deterministic.
    pub fn query_string(&self) -> String {
        let f = &self.filters;
        let pairs: [(&str, String); 9] = [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("vendor", f.vendor.clone()),
            ("product", f.product.clone()),
            ("bio_relevance", f.bio_relevance.clone()),
            ("kev_only", f.kev_only.to_string()),
            ("search", f.search.clone()),
            ("date_from", f.date_from.clone()),
            ("date_to", f.date_to.clone()),
        ];

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
