use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;

pub mod lookup;
pub mod network;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub lookup: LookupConfig,
    pub network: NetworkConfig,

    /// Bounded capacity of the bridge-to-app event queue
    pub event_queue_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let event_queue_capacity = env::var("EVENT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            lookup: LookupConfig::new(),
            network: NetworkConfig::new(),

            event_queue_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lookup: LookupConfig::default(),
            network: NetworkConfig::default(),
            event_queue_capacity: 64,
        }
    }
}
