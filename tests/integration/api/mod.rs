//! API integration tests
//!
//! Run the full router without a database: routing, authentication and
//! error rendering are exercised end to end.

#[cfg(feature = "ssr")]
mod auth_test;
#[cfg(feature = "ssr")]
mod ordering_test;
