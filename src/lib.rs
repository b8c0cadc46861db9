#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod encoding;
mod error;
mod helpers;
mod query_component;
mod query_url;

// Public API
pub use error::ParseError;
pub use query_component::{ParamValue, QueryComponent};
pub use query_url::QueryUrl;

pub type Result<T> = core::result::Result<T, ParseError>;
