use serde::{Deserialize, Serialize};

/// One row of the instance table, built fresh from every upstream response.
/// `instance_type` and `image_id` may be empty when the upstream record has
/// no value; the views substitute a dash at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    #[serde(rename = "imageId")]
    pub image_id: String,
}
