//! Data models for the BioCVE API payloads.
//!
//! This module defines the data structures exchanged with the server:
//!
//! - [`Alert`] - A vulnerability record from `/api/alerts`
//! - [`SavedItem`] - A bookmarked vulnerability from `/api/saved-vulnerabilities`
//! - [`StatsSummary`] - Precomputed dashboard statistics from `/api/stats`
//! - [`ChatReply`] - An assistant response from `/api/chatbot`
//! - [`SessionInfo`] - The logged-in/identity projection from `/api/check-session`
//!
//! These models use serde for JSON deserialization with tolerant deserializers
//! for loosely typed fields (severity strings, MySQL-style 0/1 booleans) in the
//! `de` module.

pub mod alert;
pub mod chat;
pub mod de;
pub mod saved;
pub mod session;
pub mod stats;

pub use alert::{Alert, AlertPage, BioRelevance, Severity};
pub use chat::{ChatReply, ChatRole, RelatedCve};
pub use saved::SavedItem;
pub use session::SessionInfo;
pub use stats::{BioBreakdown, ProductCount, RecentAlert, StatsSummary, TimelineBucket, VendorCount};
