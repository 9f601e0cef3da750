use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    /// Local address the selection bridge listens on
    pub bridge_addr: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let bridge_addr =
            env::var("BRIDGE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:9029".to_string());

        Self { bridge_addr }
    }

    /// URL the page-side script should connect to
    pub fn bridge_ws_url(&self) -> String {
        format!("ws://{}", self.bridge_addr)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bridge_addr: "127.0.0.1:9029".to_string(),
        }
    }
}
