use anyhow::{Result as AnyResult, anyhow};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::{
    Client,
    config::Credentials,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::ParameterStoreConfig,
    store::repository::{GetParametersOutput, Parameter, ParameterStore, StoreError},
};

const LOCALSTACK_ACCESS_KEY: &str = "test";
const LOCALSTACK_SECRET_KEY: &str = "test";

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: &ParameterStoreConfig) -> AnyResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint) = &config.localstack_endpoint {
            debug!(endpoint = endpoint.as_str(), "Using LocalStack parameter store");
            loader = loader.endpoint_url(endpoint.clone()).credentials_provider(
                Credentials::new(
                    LOCALSTACK_ACCESS_KEY,
                    LOCALSTACK_SECRET_KEY,
                    None,
                    None,
                    "localstack",
                ),
            );
        } else if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        if shared_config.region().is_none() {
            return Err(anyhow!(
                "No AWS region configured; set AWS_REGION or run on an instance with metadata access"
            ));
        }

        Ok(Self::with_client(Client::new(&shared_config)))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore")
            .field("region", &self.client.config().region())
            .finish()
    }
}

fn into_store_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    match &err {
        SdkError::ServiceError(context) => match context.err().code() {
            Some(code) => StoreError::Service {
                code: code.to_string(),
                message: context.err().message().unwrap_or_default().to_string(),
            },
            None => StoreError::Unknown(DisplayErrorContext(&err).to_string()),
        },
        _ => StoreError::Unknown(DisplayErrorContext(&err).to_string()),
    }
}

fn into_parameter(param: aws_sdk_ssm::types::Parameter) -> Parameter {
    Parameter {
        name: param.name,
        selector: param.selector,
        value: param.value,
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Parameter, StoreError> {
        debug!(name, "Requesting parameter");

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(into_store_error)?;

        Ok(output.parameter.map(into_parameter).unwrap_or_default())
    }

    async fn get_parameters(&self, names: &[String]) -> Result<GetParametersOutput, StoreError> {
        // GetParameters rejects an empty name list
        if names.is_empty() {
            return Ok(GetParametersOutput::default());
        }

        debug!(count = names.len(), "Requesting parameter batch");

        let output = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(true)
            .send()
            .await
            .map_err(into_store_error)?;

        Ok(GetParametersOutput {
            parameters: output
                .parameters
                .unwrap_or_default()
                .into_iter()
                .map(into_parameter)
                .collect(),
            invalid_parameters: output.invalid_parameters.unwrap_or_default(),
        })
    }
}
