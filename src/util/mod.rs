//! Browser glue and small shared helpers.

pub mod auth;
pub mod download;
pub mod fmt;
pub mod storage;
