use crate::output::print_json;
use pkm_core::config::Config;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Serializes as a JSON object keyed by variable name, keeping the fixed order.
struct EnvMap(Vec<(&'static str, PathBuf)>);

impl Serialize for EnvMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(key, value)| (*key, value.display().to_string())),
        )
    }
}

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&EnvMap(config.env_pairs()));
    }
    for line in config.env_vars() {
        println!("{line}");
    }
    Ok(())
}
