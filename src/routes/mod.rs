//! Navigation gating.
//!
//! `guard` holds the pure per-navigation decision; `protected` is the
//! component that applies it to the route tree. Client-side gating is a
//! UX convenience only; the API enforces authorization on every call.

pub mod guard;
pub mod protected;
