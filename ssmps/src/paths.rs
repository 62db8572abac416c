use std::collections::HashMap;

/// Resolves a parameter name against the base path.
///
/// Names that already start with `/` are absolute and bypass the base path.
pub fn make_path(base_path: &str, param_name: &str) -> String {
    if param_name.starts_with('/') {
        return param_name.to_string();
    }
    normalize_base_path(base_path) + &normalize_param_name(param_name)
}

/// Empty stays empty. Otherwise one leading `/` is ensured and every
/// trailing `/` is removed, so `/` alone normalizes to an empty prefix.
pub fn normalize_base_path(base_path: &str) -> String {
    if base_path.is_empty() {
        return String::new();
    }

    let prefixed = if base_path.starts_with('/') {
        base_path.to_string()
    } else {
        format!("/{base_path}")
    };

    prefixed.trim_end_matches('/').to_string()
}

/// Prepends `/` when missing. Trailing and repeated slashes are kept verbatim.
pub fn normalize_param_name(name: &str) -> String {
    if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/{name}")
    }
}

pub fn make_name_to_path_map(base_path: &str, names: &[String]) -> HashMap<String, String> {
    names
        .iter()
        .map(|name| (name.clone(), make_path(base_path, name)))
        .collect()
}

/// Distinct paths of `names`, in first-seen order.
pub fn distinct_paths(name_to_path: &HashMap<String, String>, names: &[String]) -> Vec<String> {
    let mut paths: Vec<String> = Vec::with_capacity(name_to_path.len());
    for name in names {
        if let Some(path) = name_to_path.get(name) {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
    }
    paths
}
