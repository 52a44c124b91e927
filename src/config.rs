// ⚙️ Server Configuration
// Read from the environment; everything has a default so the server starts
// with no setup.

use anyhow::{anyhow, Context, Result};
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "WIDGETS_ADDR";
pub const CORS_VAR: &str = "WIDGETS_CORS";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsMode {
    Permissive,
    Off,
}

impl CorsMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "permissive" | "on" => Ok(CorsMode::Permissive),
            "off" | "none" => Ok(CorsMode::Off),
            other => Err(anyhow!("Unknown {} value: {:?}", CORS_VAR, other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors: CorsMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors: CorsMode::Permissive,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_text = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid {}: {:?}", ADDR_VAR, addr_text))?;

        let cors = match lookup(CORS_VAR) {
            Some(value) => CorsMode::parse(&value)?,
            None => CorsMode::Permissive,
        };

        Ok(ServerConfig { addr, cors })
    }
}

// ============================================================================
// TESTS
// ============================================================================
