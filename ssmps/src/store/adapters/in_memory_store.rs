use std::collections::HashMap;

use crate::store::repository::*;

/// Parameter store backed by a plain map.
///
/// Keys are full request names, so a labelled variant is stored as
/// `"/app/db:prod"` next to the unlabelled `"/app/db"`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParameterStore {
    parameters: HashMap<String, String>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters<K, V>(parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    fn split_selector(name: &str) -> (&str, Option<&str>) {
        match name.find(':') {
            Some(idx) => (&name[..idx], Some(&name[idx..])),
            None => (name, None),
        }
    }

    fn lookup(&self, name: &str) -> Result<Parameter, StoreError> {
        let (base, selector) = Self::split_selector(name);

        match self.parameters.get(name) {
            Some(value) => Ok(Parameter {
                name: Some(base.to_string()),
                selector: selector.map(str::to_string),
                value: Some(value.clone()),
            }),
            None if selector.is_some() && self.parameters.contains_key(base) => Err(
                StoreError::service(
                    PARAMETER_VERSION_NOT_FOUND,
                    format!("Version {} of parameter {} not found", name, base),
                ),
            ),
            None => Err(StoreError::service(
                PARAMETER_NOT_FOUND,
                format!("Parameter {} not found", name),
            )),
        }
    }
}

#[async_trait::async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<Parameter, StoreError> {
        self.lookup(name)
    }

    async fn get_parameters(&self, names: &[String]) -> Result<GetParametersOutput, StoreError> {
        let mut output = GetParametersOutput::default();
        for name in names {
            match self.lookup(name) {
                Ok(parameter) => output.parameters.push(parameter),
                Err(_) => output.invalid_parameters.push(name.clone()),
            }
        }
        Ok(output)
    }
}
