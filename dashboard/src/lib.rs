//! Runtime layer of the crowd-monitoring dashboard client: the HTTP
//! backend client, the per-feed controller, the stats and history poll
//! loops, CSV export, and a mock backend for demos and tests.

pub mod backend;
pub mod controller;
pub mod error;
pub mod history;
pub mod mock;
pub mod poller;

pub use backend::BackendClient;
pub use controller::FeedController;
pub use error::{ClientError, Result};
pub use history::HistoryView;
pub use mock::MockBackend;
pub use poller::StatsPoller;
