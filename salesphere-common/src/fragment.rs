//! Markup for the product details container

use crate::ProductId;

/// Render the details fragment for a product.
///
/// The id is interpolated as-is unless `escape` is set; callers that may see
/// user-supplied ids should turn escaping on through `PanelConfig`.
pub fn render_product_details(product_id: &ProductId, escape: bool) -> String {
    let id = product_id.to_string();
    if escape {
        format!("<p>Product details {}</p>", escape_markup(&id))
    } else {
        format!("<p>Product details {id}</p>")
    }
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
