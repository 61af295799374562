/// Visibility of the product details panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    Hidden,
    Visible,
}

impl PanelVisibility {
    pub fn is_visible(self) -> bool {
        self == PanelVisibility::Visible
    }
}

#[allow(clippy::derivable_impls)]
impl Default for PanelVisibility {
    fn default() -> Self {
        PanelVisibility::Hidden
    }
}
