use super::{
    Configs,
    environment::{first_env, optional_env},
};

/// Connection settings for the parameter store client. Anything left unset
/// is resolved by the AWS default provider chains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    /// Local emulator endpoint. Implies static placeholder credentials.
    pub localstack_endpoint: Option<String>,
}

#[async_trait::async_trait]
impl Configs for ParameterStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(ParameterStoreConfig {
            region: first_env(&["AWS_REGION", "AWS_DEFAULT_REGION"]),
            profile: optional_env("AWS_PROFILE"),
            endpoint_url: first_env(&["AWS_ENDPOINT", "SSM_ENDPOINT"]),
            localstack_endpoint: optional_env("LOCALSTACK_ENDPOINT"),
        })
    }
}
