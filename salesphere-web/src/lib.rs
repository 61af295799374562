//! Browser binding for the product panel.
//!
//! Finds the panel's elements in the page, wires the product buttons to
//! `window.alert` and renders the initial product once the DOM is parsed.

pub mod bindings;
pub mod dom;
mod error;

use std::cell::RefCell;
use std::rc::Rc;

use salesphere_common::{PanelConfig, PanelElements, ProductPanelController};
use tracing::{error, info};
use wasm_bindgen_x::closure::Closure;
use wasm_bindgen_x::JsCast;

use bindings::{bind_buttons, PanelBindings};
use dom::{AlertNotifier, DomElement, PageElements};
pub use error::PanelError;

/// Id of the optional `<script type="application/json">` element holding a
/// `PanelConfig` override.
pub const CONFIG_ELEMENT_ID: &str = "productPanelConfig";

/// Mount the panel now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn start() -> Result<(), PanelError> {
    let window = web_sys_x::window().ok_or(PanelError::NoWindow)?;
    let document = window.document().ok_or(PanelError::NoDocument)?;

    if !is_loading(&document.ready_state()) {
        mount(&window, &document)?.keep_alive();
        return Ok(());
    }

    let doc = document.clone();
    let mut window = Some(window);
    let on_ready = Closure::wrap(Box::new(move || {
        // DOMContentLoaded fires once; the guard keeps a stray re-dispatch inert.
        let Some(window) = window.take() else {
            return;
        };
        match mount(&window, &doc) {
            Ok(bindings) => bindings.keep_alive(),
            Err(e) => error!("Product panel failed to mount: {}", e),
        }
    }) as Box<dyn FnMut()>)
    .into_js_value();
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| PanelError::Listener {
            event: "DOMContentLoaded",
            target: "document".to_string(),
            reason: format!("{e:?}"),
        })?;
    Ok(())
}

/// `document.readyState` is `"loading"` until the DOM has been parsed.
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Bind the buttons and render the initial product.
///
/// All elements are resolved before any listener is attached or content is
/// written; a missing element fails the whole mount. The returned bindings
/// own the click listeners, which in turn keep the controller alive.
pub fn mount(
    window: &web_sys_x::Window,
    document: &web_sys_x::Document,
) -> Result<PanelBindings, PanelError> {
    let config = read_config(document)?;
    let elements = PageElements::lookup(document, &config)?;

    let panel_elements = PanelElements {
        details: DomElement::new(elements.details.clone()),
        info: DomElement::new(elements.info.clone()),
    };
    let notifier = AlertNotifier::new(window.clone());
    let controller = Rc::new(RefCell::new(ProductPanelController::new(
        panel_elements,
        notifier,
        config.clone(),
    )));

    let bindings = bind_buttons(&elements, &config, &controller)?;
    controller.borrow_mut().initialize();
    info!("Product panel mounted");

    Ok(bindings)
}

/// Read the page's config element, falling back to defaults when absent.
pub fn read_config(document: &web_sys_x::Document) -> Result<PanelConfig, PanelError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PanelConfig::default());
    };
    config_from_text(&element.text_content().unwrap_or_default())
}

/// Parse the config element's text; an empty element means defaults.
fn config_from_text(text: &str) -> Result<PanelConfig, PanelError> {
    if text.trim().is_empty() {
        return Ok(PanelConfig::default());
    }
    Ok(PanelConfig::from_json(text)?)
}
