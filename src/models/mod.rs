pub mod app_state;
pub mod instance_summary;

pub use app_state::AppState;
pub use instance_summary::InstanceSummary;
