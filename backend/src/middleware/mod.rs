//! Request middleware.
//!
//! Purpose: Cross-cutting request lifecycle concerns. Currently only request
//! correlation via [`Trace`].

pub mod trace;

pub use trace::Trace;
