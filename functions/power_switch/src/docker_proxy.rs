// File: functions/power_switch/src/docker_proxy.rs
//
// Adapter for the local docker management proxy. Start/stop requests for a
// named container are forwarded as POSTs to the proxy's container endpoints.

use std::time::Duration;

use log::{debug, error};
use reqwest::Client;

use crate::error::Result;


// The proxy sits on the lab network; a hung call must not pin an
// invocation for longer than this.
const PROXY_TIMEOUT: Duration = Duration::from_secs(10);

// Outcome of a proxy call. Failures on this path are folded into the
// message instead of erroring, so the docker branch never takes down an
// invocation.
#[derive(Debug, Clone)]
pub struct ProxyOutcome {
    pub ok: bool,
    pub message: String,
}

impl ProxyOutcome {
    fn accepted(message: String) -> Self {
        Self { ok: true, message }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

pub struct DockerProxy {
    base_url: Option<String>,
    http: Client,
}

impl DockerProxy {
    // Build the adapter. The base URL stays optional: a switch deployed
    // without a proxy still serves the EC2 path.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let http = Client::builder().timeout(PROXY_TIMEOUT).build()?;

        Ok(Self { base_url, http })
    }

    // Run one container action through the proxy.
    //
    // Preconditions short-circuit in the order they are written here:
    // unconfigured proxy, then missing name, then unknown action.
    pub async fn container_action(&self, action: Option<&str>, name: Option<&str>) -> ProxyOutcome {
        let base_url = match &self.base_url {
            Some(url) => url,
            None => return ProxyOutcome::rejected("DOCKER_PROXY not configured"),
        };

        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => return ProxyOutcome::rejected("missing name (?name=...)"),
        };

        let action = match action {
            Some(a @ "start") | Some(a @ "stop") => a,
            _ => return ProxyOutcome::rejected("invalid docker action"),
        };

        let url = format!("{}/containers/{}/{}", base_url, name, action);
        debug!("Forwarding container action to {}", url);

        // An error status from the proxy counts as a failure, the same as
        // a transport error.
        let result = self
            .http
            .post(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(response) => ProxyOutcome::accepted(format!(
                "docker {} {} -> {}",
                action,
                name,
                response.status().as_u16()
            )),
            Err(e) => {
                error!("Docker proxy request failed: {}", e);
                ProxyOutcome::rejected(format!("docker error: {}", e))
            }
        }
    }
}
