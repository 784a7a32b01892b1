pub mod commands;
pub mod error;
pub mod state;

pub use commands::CollectionName;
pub use error::{AdminError, AdminResult};
pub use state::{DashboardSummary, ResetReport, SiteStore};
