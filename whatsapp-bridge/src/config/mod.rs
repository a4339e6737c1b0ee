//! Bridge configuration: listen address, logging, Messages API connection. Loaded from env.

mod bridge_config;

#[cfg(test)]
mod tests;

pub use bridge_config::BridgeConfig;
