/// Development utilities module
///
/// Fixture-backed data source for running the dashboard without network access.

pub mod mock_client;
pub use mock_client::MockClient;
