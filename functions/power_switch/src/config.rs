// File: functions/power_switch/src/config.rs

use std::env;

use crate::error::{PowerError, Result};


// Region used when the runtime does not provide one.
const DEFAULT_REGION: &str = "us-east-1";

// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub aws_region: String,
    pub instance_id: String,
    pub aws_endpoint: String,
    pub docker_proxy: Option<String>,
}

impl Config {
    // Load configuration from the process environment.
    //
    // INSTANCE_ID and AWS_ENDPOINT_INTERNAL are required; without them the
    // function refuses to start. DOCKER_PROXY stays optional and is only
    // consulted when a docker request arrives.
    pub fn from_env() -> Result<Self> {
        let aws_region = env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let instance_id = require("INSTANCE_ID")?;
        let aws_endpoint = require("AWS_ENDPOINT_INTERNAL")?;

        // An empty DOCKER_PROXY counts as not configured.
        let docker_proxy = env::var("DOCKER_PROXY").ok().filter(|v| !v.is_empty());

        Ok(Self {
            aws_region,
            instance_id,
            aws_endpoint,
            docker_proxy,
        })
    }
}

fn require(key: &'static str) -> Result<String> {
    env::var(key).map_err(|_| PowerError::MissingEnv(key))
}
