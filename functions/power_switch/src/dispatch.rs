// File: functions/power_switch/src/dispatch.rs
//
// Request dispatch: one inbound gateway event in, one plain-text response
// out.

use lambda_http::{Body, Request, Response};
use log::{info, warn};

use crate::docker_proxy::DockerProxy;
use crate::ec2_control::InstancePower;
use crate::error::Result;
use crate::request::PowerRequest;


// Hint returned whenever the EC2 path sees an action it cannot handle.
const USAGE: &str = "use ?action=start|stop (optional: &target=docker&name=...)";

pub struct PowerSwitch<P> {
    compute: P,
    proxy: DockerProxy,
    instance_id: String,
}

impl<P: InstancePower> PowerSwitch<P> {
    pub fn new(compute: P, proxy: DockerProxy, instance_id: String) -> Self {
        Self {
            compute,
            proxy,
            instance_id,
        }
    }

    // Route one event to a backend and synthesize the response.
    //
    // The docker branch never returns Err: the proxy adapter folds its
    // failures into the outcome. On the EC2 branch a failed control-plane
    // call propagates out of here and fails the whole invocation.
    pub async fn handle(&self, event: Request) -> Result<Response<Body>> {
        let request = PowerRequest::from_event(&event);
        info!(
            "Dispatching action={:?} target={} name={:?}",
            request.action,
            request.target(),
            request.name
        );

        if request.target() == "docker" {
            let outcome = self
                .proxy
                .container_action(request.action.as_deref(), request.name.as_deref())
                .await;

            let status = if outcome.ok { 200 } else { 400 };
            return text_response(status, outcome.message);
        }

        // Every target other than "docker" means the EC2 instance; unknown
        // values fall through rather than erroring.
        match request.action.as_deref() {
            Some("start") => {
                self.compute.start(&self.instance_id).await?;
                text_response(200, format!("started {}", self.instance_id))
            }
            Some("stop") => {
                self.compute.stop(&self.instance_id).await?;
                text_response(200, format!("stopped {}", self.instance_id))
            }
            other => {
                warn!("Rejected request with action={:?}", other);
                text_response(400, USAGE.to_string())
            }
        }
    }
}

// Plain-text response with the given status code.
fn text_response(status: u16, body: String) -> Result<Response<Body>> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(body))?;

    Ok(response)
}
