use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::config::Credentials;
use aws_sdk_ec2::types::Reservation;
use aws_sdk_ec2::Client;

use super::error::InventoryError;
use crate::config;

/// Seam between the request handlers and EC2. Tests substitute this with a
/// canned collaborator; production uses [`Ec2Inventory`].
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// One unfiltered DescribeInstances call, returned as-is.
    async fn describe_all(&self) -> Result<Vec<Reservation>, InventoryError>;
}

pub struct Ec2Inventory {
    client: Client,
}

impl Ec2Inventory {
    /// Build the long-lived EC2 client from the process environment.
    ///
    /// Missing or invalid credentials are not detected here; they surface as
    /// a failed DescribeInstances call on first use.
    pub async fn from_env() -> Self {
        let credentials = Credentials::new(
            config::get_access_key_id(),
            config::get_secret_access_key(),
            None,
            None,
            "environment",
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config::REGION))
            .credentials_provider(credentials)
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl InstanceSource for Ec2Inventory {
    async fn describe_all(&self) -> Result<Vec<Reservation>, InventoryError> {
        let response = self
            .client
            .describe_instances()
            .send()
            .await
            .map_err(|e| InventoryError::Describe(e.to_string()))?;
        Ok(response.reservations.unwrap_or_default())
    }
}
