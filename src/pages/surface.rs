use std::fmt;

/// A named slot in the page shell that a controller renders into.
///
/// These correspond one-to-one with the container elements of the HTML pages;
/// the surface implementation decides what "rendering into" means (a DOM
/// write, a stdout section, a recorded string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    NavUsername,
    VendorOptions,
    ProductOptions,
    AlertsTable,
    ResultsInfo,
    Pagination,
    DetailTitle,
    DetailBody,
    SavedCount,
    SavedList,
    StatTotal,
    StatKev,
    StatBio,
    StatMonth,
    BioHigh,
    BioMedium,
    BioLow,
    TopVendors,
    TopProducts,
    Timeline,
    PriorityAlerts,
    LoginError,
    SignupError,
    Transcript,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The rendering boundary controllers write through.
///
/// Methods take `&self` because the surface plays the DOM's role of a shared
/// mutable resource: implementations use interior mutability, and the last
/// completed write to a region wins. `append_html` returns an entry handle so
/// transient entries (the chat "thinking" placeholder) can be removed.
pub trait Surface {
    /// Replace a region's markup.
    fn set_html(&self, region: Region, html: String);

    /// Replace a region's text content.
    fn set_text(&self, region: Region, text: String);

    /// Append an entry to an append-only region (the chat transcript) and
    /// return its handle.
    fn append_html(&self, region: Region, html: String) -> usize;

    /// Remove a previously appended entry.
    fn remove_entry(&self, region: Region, entry: usize);

    /// Blocking notification (the `alert()` equivalent).
    fn notify(&self, message: &str);

    /// Interactive confirmation for destructive actions (the `confirm()`
    /// equivalent).
    fn confirm(&self, message: &str) -> bool;

    /// Navigate the page away (the `window.location` equivalent).
    fn navigate(&self, location: &str);
}
