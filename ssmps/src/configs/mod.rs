pub mod environment;
pub mod store;

pub use store::ParameterStoreConfig;

use environment::env_or;

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, Default)]
pub struct SsmpsConfig {
    /// Prefix applied to relative parameter names (`SSMPS_BASE_PATH`).
    pub base_path: String,
    pub store_config: ParameterStoreConfig,
}

impl SsmpsConfig {
    pub fn with_base_path(mut self, base_path: Option<String>) -> Self {
        if let Some(base_path) = base_path {
            self.base_path = base_path;
        }
        self
    }
}

#[async_trait::async_trait]
impl Configs for SsmpsConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            base_path: env_or("SSMPS_BASE_PATH", ""),
            store_config: ParameterStoreConfig::load().await?,
        })
    }
}
