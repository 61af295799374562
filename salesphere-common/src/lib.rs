mod action;
mod config;
mod controller;
mod fragment;
mod product_id;
mod visibility;

pub use action::ProductAction;
pub use config::{ConfigError, PanelConfig};
pub use controller::{Notifier, PanelElement, PanelElements, ProductPanelController};
pub use fragment::{escape_markup, render_product_details};
pub use product_id::ProductId;
pub use visibility::PanelVisibility;
