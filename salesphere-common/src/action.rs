/// The three product buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAction {
    Add,
    Edit,
    Delete,
}

impl ProductAction {
    pub const ALL: [ProductAction; 3] = [
        ProductAction::Add,
        ProductAction::Edit,
        ProductAction::Delete,
    ];

    /// Fixed text shown when the button is clicked
    pub fn message(self) -> &'static str {
        match self {
            ProductAction::Add => "Add product",
            ProductAction::Edit => "Edit product",
            ProductAction::Delete => "Delete product",
        }
    }

    /// Element id the page uses for this button unless configured otherwise
    pub fn default_button_id(self) -> &'static str {
        match self {
            ProductAction::Add => "addProductBtn",
            ProductAction::Edit => "editProductBtn",
            ProductAction::Delete => "deleteProductBtn",
        }
    }
}
