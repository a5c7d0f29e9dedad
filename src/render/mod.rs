//! The rendering boundary: typed records in, HTML fragments out.
//!
//! Every piece of server-supplied text is escaped here and nowhere else;
//! controllers hand whole records to these functions and never concatenate
//! markup themselves. The only unescaped interpolations are enum-derived CSS
//! class suffixes, which are constrained and lower-cased at the type level.
//!
//! The fragment markup (classes, placeholder strings, column counts) matches
//! the application's page shells, which are outside this crate.

pub mod alerts;
pub mod chat;
pub mod dashboard;
pub mod detail;
pub mod html;
pub mod saved;

pub use html::{escape_html, format_count, format_date};
