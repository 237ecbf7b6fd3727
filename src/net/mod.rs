//! HTTP client layer.
//!
//! DESIGN
//! ======
//! `http` is the authenticated request pipeline every call goes through;
//! `error` is the one error type call sites pattern-match on; `api` wraps
//! the individual endpoints; `types` holds wire shapes and the helpers
//! that absorb their looser variants.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
