use tracing::{debug, info};

use crate::{render_product_details, PanelConfig, PanelVisibility, ProductAction, ProductId};

/// Shows a blocking message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// The subset of a page element the panel writes to
pub trait PanelElement {
    /// Replace the element's content with `html`
    fn set_inner_html(&self, html: &str);
    fn remove_class(&self, class: &str);
}

/// Element handles the controller renders into
pub struct PanelElements<E> {
    /// Outer container, hidden until the first render
    pub details: E,
    /// Inner container holding the rendered fragment
    pub info: E,
}

/// Product panel controller.
///
/// Owns the details/info element handles and a notifier. Button clicks only
/// notify; `load_product_details` is the only operation that touches the page.
pub struct ProductPanelController<E, N> {
    elements: PanelElements<E>,
    notifier: N,
    config: PanelConfig,
    visibility: PanelVisibility,
    current_product: Option<ProductId>,
}

impl<E: PanelElement, N: Notifier> ProductPanelController<E, N> {
    pub fn new(elements: PanelElements<E>, notifier: N, config: PanelConfig) -> Self {
        Self {
            elements,
            notifier,
            config,
            visibility: PanelVisibility::Hidden,
            current_product: None,
        }
    }

    /// Render the configured initial product, revealing the panel.
    pub fn initialize(&mut self) {
        let product_id = self.config.initial_product_id.clone();
        self.load_product_details(&product_id);
    }

    pub fn on_add_product_clicked(&self) {
        self.handle_action(ProductAction::Add);
    }

    pub fn on_edit_product_clicked(&self) {
        self.handle_action(ProductAction::Edit);
    }

    pub fn on_delete_product_clicked(&self) {
        self.handle_action(ProductAction::Delete);
    }

    pub fn handle_action(&self, action: ProductAction) {
        debug!("Product action {:?}", action);
        self.notifier.notify(action.message());
    }

    /// Overwrite the info container with the product's details and make sure
    /// the details container is visible. Repeating a call is a no-op.
    pub fn load_product_details(&mut self, product_id: &ProductId) {
        let fragment = render_product_details(product_id, self.config.escape_product_ids);
        debug!("Rendering details for product {}", product_id);
        self.elements.info.set_inner_html(&fragment);
        self.elements.details.remove_class(&self.config.hidden_class);

        if !self.visibility.is_visible() {
            info!("Product details panel revealed (product {})", product_id);
            self.visibility = PanelVisibility::Visible;
        }
        self.current_product = Some(product_id.clone());
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    /// Product shown by the most recent render
    pub fn current_product(&self) -> Option<&ProductId> {
        self.current_product.as_ref()
    }

    pub fn elements(&self) -> &PanelElements<E> {
        &self.elements
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}
