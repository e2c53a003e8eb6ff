//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cards`, `users`, `ui`) so panels
//! can depend on small focused models. `sync` holds the fetch flows that
//! keep local collections aligned with the server after mutations.

pub mod cards;
pub mod session;
pub mod sync;
pub mod ui;
pub mod users;
