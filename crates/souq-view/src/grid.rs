//! Product grid renderer.

use crate::card::render_card;
use crate::escape_html;
use souq_core::catalog::Product;
use souq_core::money::Currency;

/// Render the product grid for the current filtered view.
///
/// Cards appear in the order the iterator yields them, each with its
/// quantity field reset to 1, the way a fresh render of the page starts.
/// An empty view renders an empty grid.
pub fn render_grid<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    currency: Currency,
) -> String {
    let cards: String = products
        .into_iter()
        .map(|p| render_card(p, 1, currency))
        .collect();

    format!(
        r#"<section class="grid" role="list" data-section="grid">
    {}
</section>"#,
        cards
    )
}

/// Render the message shown in place of the grid when a dataset fails to
/// load.
pub fn render_load_error(reason: &str) -> String {
    format!(
        r#"<section class="grid grid-error" data-section="grid">
    <p role="alert">Unable to load products: {}</p>
</section>"#,
        escape_html(reason)
    )
}
