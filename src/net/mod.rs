//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns bearer attachment and response classification, `api` exposes
//! typed endpoint calls, `types` defines the wire schema, and `error` is the
//! failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
