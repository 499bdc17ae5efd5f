// Adapter for the EC2 control plane. One client is built at startup and
// reused across invocations.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::error::DisplayErrorContext;
use log::info;

use crate::config::Config;
use crate::error::{PowerError, Result};

/// Start/stop control over a single compute instance.
///
/// The dispatcher depends on this seam only, so tests can swap in a stub
/// instead of a live client.
pub trait InstancePower {
    /// Issue a start call for the given instance id.
    async fn start(&self, instance_id: &str) -> Result<()>;

    /// Issue a stop call for the given instance id.
    async fn stop(&self, instance_id: &str) -> Result<()>;
}

pub struct Ec2Control {
    client: aws_sdk_ec2::Client,
}

impl Ec2Control {
    // Build the SDK client from the loaded configuration. The endpoint
    // override points the client at the lab's internal API instead of the
    // public one.
    pub async fn connect(config: &Config) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .endpoint_url(&config.aws_endpoint)
            .load()
            .await;

        Self {
            client: aws_sdk_ec2::Client::new(&shared),
        }
    }
}

impl InstancePower for Ec2Control {
    async fn start(&self, instance_id: &str) -> Result<()> {
        info!("Starting instance {}", instance_id);

        self.client
            .start_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| PowerError::StartError(format!("{}", DisplayErrorContext(e))))?;

        Ok(())
    }

    async fn stop(&self, instance_id: &str) -> Result<()> {
        info!("Stopping instance {}", instance_id);

        self.client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(|e| PowerError::StopError(format!("{}", DisplayErrorContext(e))))?;

        Ok(())
    }
}
