//! Config schema and deserialization

use serde::Deserialize;
use std::collections::HashMap;

/// Root config structure for .leadscorerc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum overall score threshold (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Per-category weight overrides, merged over the defaults.
    /// Key is the category name (e.g. "Lead Capture").
    #[serde(default)]
    pub weights: HashMap<String, f64>,

    /// Per-trade industry-average monthly spend overrides, merged over the
    /// built-in table. Key is the trade (e.g. "HVAC").
    #[serde(default)]
    pub industry_spend: HashMap<String, u32>,
}

impl Config {
    /// Effective weight table: defaults with this config's overrides applied
    pub fn effective_weights(&self) -> HashMap<String, f64> {
        let mut weights = crate::analyzer::default_weights();
        for (name, weight) in &self.weights {
            weights.insert(name.clone(), *weight);
        }
        weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_default_weights() {
        let config: Config = serde_json::from_str("{}").unwrap();
        let weights = config.effective_weights();
        assert_eq!(weights.get("Mobile Experience"), Some(&0.25));
        assert_eq!(weights.get("Lead Capture"), Some(&0.25));
    }

    #[test]
    fn weight_overrides_merge_over_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"weights": {"Lead Capture": 0.4}}"#).unwrap();
        let weights = config.effective_weights();
        assert_eq!(weights.get("Lead Capture"), Some(&0.4));
        assert_eq!(weights.get("Mobile Experience"), Some(&0.25));
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let config: Config = serde_json::from_str(
            r#"{"threshold": 70, "industrySpend": {"HVAC": 3000}}"#,
        )
        .unwrap();
        assert_eq!(config.threshold, Some(70));
        assert_eq!(config.industry_spend.get("HVAC"), Some(&3000));
    }
}
