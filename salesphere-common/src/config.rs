//! Panel configuration: element ids, hidden class and initial product

use crate::{ProductAction, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid panel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Panel config field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}

/// Where the panel lives in the page and what it shows first.
///
/// Every field has a default matching the stock product page markup, so an
/// empty JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub add_button_id: String,
    pub edit_button_id: String,
    pub delete_button_id: String,
    /// Container whose hidden class is removed on first render
    pub details_container_id: String,
    /// Container whose content is replaced on every render
    pub info_container_id: String,
    pub hidden_class: String,
    /// Product rendered during initialization
    pub initial_product_id: ProductId,
    /// Escape markup in product ids before interpolating them
    pub escape_product_ids: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            add_button_id: ProductAction::Add.default_button_id().to_string(),
            edit_button_id: ProductAction::Edit.default_button_id().to_string(),
            delete_button_id: ProductAction::Delete.default_button_id().to_string(),
            details_container_id: "productDetails".to_string(),
            info_container_id: "productInfo".to_string(),
            hidden_class: "d-none".to_string(),
            initial_product_id: ProductId::default(),
            escape_product_ids: false,
        }
    }
}

impl PanelConfig {
    /// Parse a JSON config, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("add_button_id", &self.add_button_id),
            ("edit_button_id", &self.edit_button_id),
            ("delete_button_id", &self.delete_button_id),
            ("details_container_id", &self.details_container_id),
            ("info_container_id", &self.info_container_id),
            ("hidden_class", &self.hidden_class),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }

    /// Configured element id of the button for `action`
    pub fn button_id(&self, action: ProductAction) -> &str {
        match action {
            ProductAction::Add => &self.add_button_id,
            ProductAction::Edit => &self.edit_button_id,
            ProductAction::Delete => &self.delete_button_id,
        }
    }
}
