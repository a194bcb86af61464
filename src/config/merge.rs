//! Layering a user config over a preset.

/// Merge `child` over `base`. Tables merge key by key; any other value in
/// `child` (scalars and arrays alike) replaces the one in `base`.
#[must_use]
pub fn merge_toml_values(base: toml::Value, child: toml::Value) -> toml::Value {
    match (base, child) {
        (toml::Value::Table(mut base_table), toml::Value::Table(child_table)) => {
            for (key, child_val) in child_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml_values(base_val, child_val),
                    None => child_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, child) => child,
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
