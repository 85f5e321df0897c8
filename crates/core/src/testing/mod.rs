//! Testing utilities and mock implementations.
//!
//! [`MockFetcher`] stands in for the HTTP fetcher so the whole pipeline can
//! run in tests without a network.

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;
