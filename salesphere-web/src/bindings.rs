//! Click listeners for the product buttons

use std::cell::RefCell;
use std::rc::Rc;

use salesphere_common::{PanelConfig, ProductAction, ProductPanelController};
use tracing::{debug, warn};
use wasm_bindgen_x::closure::Closure;
use wasm_bindgen_x::JsCast;

use crate::dom::{AlertNotifier, DomElement, PageElements};
use crate::PanelError;

pub type WebPanelController = ProductPanelController<DomElement, AlertNotifier>;

/// Listener closures attached to the buttons.
///
/// Dropping this invalidates the JS callbacks; call `keep_alive` once the
/// panel should stay wired for the rest of the page's life.
pub struct PanelBindings {
    listeners: Vec<Closure<dyn FnMut()>>,
}

impl PanelBindings {
    pub fn keep_alive(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Attach one click listener per product button, each dispatching its action
/// to the shared controller.
///
/// Either every button is bound or none is: listeners attached before a
/// failure are removed again before the error is returned.
pub fn bind_buttons(
    elements: &PageElements,
    config: &PanelConfig,
    controller: &Rc<RefCell<WebPanelController>>,
) -> Result<PanelBindings, PanelError> {
    let targets: Vec<(ProductAction, &web_sys_x::Element, Closure<dyn FnMut()>)> =
        ProductAction::ALL
            .into_iter()
            .map(|action| {
                let button = match action {
                    ProductAction::Add => &elements.add_button,
                    ProductAction::Edit => &elements.edit_button,
                    ProductAction::Delete => &elements.delete_button,
                };
                let controller = controller.clone();
                let cb = Closure::wrap(Box::new(move || {
                    controller.borrow().handle_action(action);
                }) as Box<dyn FnMut()>);
                (action, button, cb)
            })
            .collect();

    attach_all(
        targets.as_slice(),
        |(action, button, cb)| -> Result<(), PanelError> {
            button
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .map_err(|e| PanelError::Listener {
                    event: "click",
                    target: format!("#{}", config.button_id(*action)),
                    reason: format!("{e:?}"),
                })?;
            debug!("Bound {:?} to #{}", action, config.button_id(*action));
            Ok(())
        },
        |(action, button, cb)| {
            if let Err(e) =
                button.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            {
                warn!("Failed to unbind {:?}: {:?}", action, e);
            }
        },
    )?;

    Ok(PanelBindings {
        listeners: targets.into_iter().map(|(_, _, cb)| cb).collect(),
    })
}

/// Run `attach` over `targets` in order. On the first failure, run `detach`
/// over the targets already attached (most recent first) and return the error.
fn attach_all<T, E>(
    targets: &[T],
    mut attach: impl FnMut(&T) -> Result<(), E>,
    mut detach: impl FnMut(&T),
) -> Result<(), E> {
    for (i, target) in targets.iter().enumerate() {
        if let Err(e) = attach(target) {
            for attached in targets[..i].iter().rev() {
                detach(attached);
            }
            return Err(e);
        }
    }
    Ok(())
}
