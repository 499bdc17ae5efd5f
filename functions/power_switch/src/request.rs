// Typed view over the gateway event's query string.

use lambda_http::{Request, RequestExt};

#[cfg(test)]
mod tests;

// Backend used when no target parameter is present.
const DEFAULT_TARGET: &str = "ec2";

#[derive(Debug, Clone)]
pub struct PowerRequest {
    pub action: Option<String>,
    pub target: Option<String>,
    pub name: Option<String>,
}

impl PowerRequest {
    // Pull the three known parameters out of the event. An event without a
    // query map behaves exactly like one with an empty map; nothing gets
    // rejected here, validation belongs to the dispatcher.
    pub fn from_event(event: &Request) -> Self {
        let params = event.query_string_parameters();

        Self {
            action: params.first("action").map(str::to_string),
            target: params.first("target").map(str::to_string),
            name: params.first("name").map(str::to_string),
        }
    }

    // The requested backend, defaulting to the EC2 instance.
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(DEFAULT_TARGET)
    }
}
