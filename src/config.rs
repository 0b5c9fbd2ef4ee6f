// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AnnotatorError;
use crate::genetic_code::{GeneticCode, STANDARD_CODE_ID};

pub const DEFAULT_VIEW_BOX: &str = "0 0 1500 750";

// Everything that shapes a render. Deserialized from the "config" block of an input file; every
// field may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub fontsize: f64,
    pub fontfamily: String,
    pub block_width: usize,
    /// Interval between tick marks, in columns.
    pub offset: usize,
    /// Added to every coordinate label.
    pub start: i64,
    pub with_translation: bool,
    #[serde(alias = "viewBox")]
    pub view_box: String,
    pub genetic_code: u8,
    pub rebase_annotations: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            fontsize: 20.0,
            fontfamily: String::from("monospace"),
            block_width: 100,
            offset: 10,
            start: 0,
            with_translation: true,
            view_box: String::from(DEFAULT_VIEW_BOX),
            genetic_code: STANDARD_CODE_ID,
            rebase_annotations: false,
        }
    }
}

impl RenderConfig {
    pub fn from_value(value: &Value) -> Result<Self, AnnotatorError> {
        let config: RenderConfig = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnnotatorError> {
        if !(self.fontsize.is_finite() && self.fontsize > 0.0) {
            return Err(AnnotatorError::MalformedInput(format!(
                "fontsize must be positive, got {}",
                self.fontsize
            )));
        }
        if self.block_width == 0 {
            return Err(AnnotatorError::MalformedInput(String::from(
                "block_width must be positive",
            )));
        }
        if self.offset == 0 {
            return Err(AnnotatorError::MalformedInput(String::from(
                "offset must be positive",
            )));
        }
        if self.view_box.split_whitespace().count() != 4
            || self
                .view_box
                .split_whitespace()
                .any(|n| n.parse::<f64>().is_err())
        {
            return Err(AnnotatorError::MalformedInput(format!(
                "view_box must be four numbers, got '{}'",
                self.view_box
            )));
        }
        self.code().map(|_| ())
    }

    pub fn code(&self) -> Result<GeneticCode, AnnotatorError> {
        GeneticCode::from_ncbi_id(self.genetic_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_block_gives_defaults() {
        let config = RenderConfig::from_value(&json!({})).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.fontsize, 20.0);
        assert_eq!(config.block_width, 100);
        assert_eq!(config.offset, 10);
        assert!(config.with_translation);
        assert_eq!(config.view_box, "0 0 1500 750");
    }

    #[test]
    fn test_config_from_value() {
        let value = json!({
            "fontsize": 14,
            "fontfamily": "Courier",
            "block_width": 30,
            "offset": 5,
            "start": 100,
            "with_translation": false,
            "viewBox": "0 0 800 600",
            "genetic_code": 11
        });
        let config = RenderConfig::from_value(&value).unwrap();
        assert_eq!(config.fontsize, 14.0);
        assert_eq!(config.fontfamily, "Courier");
        assert_eq!(config.block_width, 30);
        assert_eq!(config.offset, 5);
        assert_eq!(config.start, 100);
        assert!(!config.with_translation);
        assert_eq!(config.view_box, "0 0 800 600");
        assert_eq!(config.code().unwrap().id, 11);
    }

    #[test]
    fn test_rejects_bad_values() {
        for value in [
            json!({"block_width": 0}),
            json!({"offset": 0}),
            json!({"fontsize": 0}),
            json!({"genetic_code": 7}),
            json!({"view_box": "0 0 wide"}),
            json!({"font_size": 12}),
        ] {
            assert!(
                matches!(
                    RenderConfig::from_value(&value),
                    Err(AnnotatorError::MalformedInput(_))
                ),
                "accepted {}",
                value
            );
        }
    }
}
