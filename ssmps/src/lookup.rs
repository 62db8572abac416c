use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    batch::{GET_PARAMETERS_BATCH_LIMIT, make_batches},
    error::LookupError,
    store::repository::ParameterStore,
};

/// Fetches one decrypted parameter. Missing parameters and versions resolve
/// to an empty string.
pub async fn get_param_value<S>(store: &S, name: &str) -> Result<String, LookupError>
where
    S: ParameterStore + ?Sized,
{
    match store.get_parameter(name).await {
        Ok(parameter) => parameter
            .value
            .ok_or_else(|| LookupError::MissingValue(name.to_string())),
        Err(err) if err.is_not_found() => {
            warn!("ssmps({:?}) returned no data: {}", name, err.code().unwrap_or_default());
            Ok(String::new())
        }
        Err(err) => Err(LookupError::from_store(Some(name), err)),
    }
}

/// Fetches every path in batches of [`GET_PARAMETERS_BATCH_LIMIT`].
///
/// Each requested path gets an entry, empty unless the store returned a
/// value for it. The first failing batch aborts the whole lookup.
pub async fn get_multiple_param_values<S>(
    store: &S,
    paths: &[String],
) -> Result<HashMap<String, String>, LookupError>
where
    S: ParameterStore + ?Sized,
{
    let batches = make_batches(paths, GET_PARAMETERS_BATCH_LIMIT)?;

    let mut path_to_value: HashMap<String, String> = paths
        .iter()
        .map(|path| (path.clone(), String::new()))
        .collect();

    for batch in batches {
        debug!(size = batch.len(), "Fetching parameter batch");

        let output = store
            .get_parameters(&batch)
            .await
            .map_err(|err| LookupError::from_store(None, err))?;

        for invalid in &output.invalid_parameters {
            warn!("ssmps({:?}) returned no data: Invalid Parameter", invalid);
        }

        for parameter in output.parameters {
            let key = parameter.result_key();
            path_to_value.insert(key, parameter.value.unwrap_or_default());
        }
    }

    Ok(path_to_value)
}
