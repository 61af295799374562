//! DOM-backed implementations of the panel capabilities

use salesphere_common::{Notifier, PanelConfig, PanelElement};
use tracing::warn;

use crate::PanelError;

/// A page element the panel renders into
pub struct DomElement {
    element: web_sys_x::Element,
}

impl DomElement {
    pub fn new(element: web_sys_x::Element) -> Self {
        Self { element }
    }
}

impl PanelElement for DomElement {
    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.element.class_list().remove_1(class) {
            warn!(
                "Failed to remove class {} from #{}: {:?}",
                class,
                self.element.id(),
                e
            );
        }
    }
}

/// Notifier backed by `window.alert`
pub struct AlertNotifier {
    window: web_sys_x::Window,
}

impl AlertNotifier {
    pub fn new(window: web_sys_x::Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Alert failed for {:?}: {:?}", message, e);
        }
    }
}

/// The five elements the product page must provide
pub struct PageElements {
    pub add_button: web_sys_x::Element,
    pub edit_button: web_sys_x::Element,
    pub delete_button: web_sys_x::Element,
    pub details: web_sys_x::Element,
    pub info: web_sys_x::Element,
}

impl PageElements {
    /// Look every element up before anything is bound, so a page missing
    /// one of them is left untouched.
    pub fn lookup(
        document: &web_sys_x::Document,
        config: &PanelConfig,
    ) -> Result<Self, PanelError> {
        Ok(Self {
            add_button: find_element(document, &config.add_button_id)?,
            edit_button: find_element(document, &config.edit_button_id)?,
            delete_button: find_element(document, &config.delete_button_id)?,
            details: find_element(document, &config.details_container_id)?,
            info: find_element(document, &config.info_container_id)?,
        })
    }
}

pub fn find_element(
    document: &web_sys_x::Document,
    id: &str,
) -> Result<web_sys_x::Element, PanelError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PanelError::MissingElement { id: id.to_string() })
}
