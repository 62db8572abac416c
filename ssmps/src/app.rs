use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::LookupError,
    lookup::get_multiple_param_values,
    paths::{distinct_paths, make_name_to_path_map},
    store::repository::ParameterStore,
};

/// Result of one invocation, shaped by how many names were asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Single(String),
    Multiple(BTreeMap<String, String>),
}

impl Output {
    /// Text written to stdout: the bare value, or a compact JSON object.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Output::Single(value) => Ok(format!("{}\n", value)),
            Output::Multiple(values) => Ok(format!("{}\n", serde_json::to_string(values)?)),
        }
    }
}

pub fn validate_names(names: &[String]) -> Result<(), LookupError> {
    if names.is_empty() {
        return Err(LookupError::InvalidArgument("Too few arguments".to_string()));
    }
    Ok(())
}

/// Resolves `names` against `base_path` and fetches all of them.
///
/// A name given twice is looked up once. Nothing is returned unless every
/// batch succeeds.
pub async fn fetch<S>(store: &S, base_path: &str, names: &[String]) -> Result<Output, LookupError>
where
    S: ParameterStore + ?Sized,
{
    validate_names(names)?;

    let name_to_path = make_name_to_path_map(base_path, names);
    let paths = distinct_paths(&name_to_path, names);
    debug!(names = names.len(), paths = paths.len(), "Resolved parameter paths");

    let path_to_value = get_multiple_param_values(store, &paths).await?;
    let value_of = |name: &String| {
        name_to_path
            .get(name)
            .and_then(|path| path_to_value.get(path))
            .cloned()
            .unwrap_or_default()
    };

    if let [name] = names {
        return Ok(Output::Single(value_of(name)));
    }

    let values = name_to_path
        .keys()
        .map(|name| (name.clone(), value_of(name)))
        .collect();
    Ok(Output::Multiple(values))
}
