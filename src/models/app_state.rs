use std::sync::Arc;

use crate::ec2::InstanceSource;

#[derive(Clone)]
pub struct AppState {
    /// Long-lived upstream inventory handle, built once at startup.
    pub inventory: Arc<dyn InstanceSource>,
    pub custom_css: Option<String>,
}
