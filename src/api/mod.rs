//! The consumed HTTP JSON contract of the BioCVE server.
//!
//! [`VulnApi`] exposes one async operation per endpoint; [`HttpApi`] is the
//! production implementation over reqwest. Tests substitute a scripted fake.
//! [`ApiError`] is the two-way error taxonomy: transport failures versus
//! non-success responses carrying a server message.

pub mod client;
pub mod error;

pub use client::{HttpApi, VulnApi};
pub use error::{ApiError, ApiResult};
