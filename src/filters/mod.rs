//! Filter state and query construction for the alerts list.
//!
//! [`FilterSet`] is the transient client-side filter state; [`AlertQuery`]
//! pairs it with pagination and produces the deterministic query string the
//! alerts endpoint expects. [`FilterOptions`] carries the dropdown option
//! lists served by `/api/filter-options`.

pub mod options;
pub mod query;

pub use options::FilterOptions;
pub use query::{AlertQuery, FilterSet, PAGE_SIZE};
