// File: functions/power_switch/src/main.rs
//
// Gateway-fronted power switch for the dev lab. One function flips the EC2
// instance or, behind ?target=docker, containers on the local proxy.

mod config;
mod dispatch;
mod docker_proxy;
mod ec2_control;
mod error;
mod request;

use dotenv::dotenv;
use lambda_http::{run, service_fn, Error, Request};
use log::info;

use config::Config;
use dispatch::PowerSwitch;
use docker_proxy::DockerProxy;
use ec2_control::Ec2Control;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Missing required configuration is fatal here: the function must not
    // come up without an instance id and an API endpoint to control.
    let config = Config::from_env()?;
    info!(
        "Power switch ready: instance {} via {} (docker proxy: {})",
        config.instance_id,
        config.aws_endpoint,
        config.docker_proxy.as_deref().unwrap_or("off")
    );

    let compute = Ec2Control::connect(&config).await;
    let proxy = DockerProxy::new(config.docker_proxy.clone())?;
    let switch = PowerSwitch::new(compute, proxy, config.instance_id.clone());

    // The runtime loop borrows the one switch built above; nothing is
    // constructed per invocation.
    let shared = &switch;
    run(service_fn(move |event: Request| async move {
        shared.handle(event).await.map_err(Error::from)
    }))
    .await
}
