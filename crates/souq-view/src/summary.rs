//! Cart summary renderer.

use souq_core::cart::CartSummary;
use souq_core::money::Currency;

/// Render the cart total and item count display.
///
/// Recomputed and swapped in after every cart mutation.
pub fn render_summary(summary: CartSummary, currency: Currency) -> String {
    format!(
        r#"<div class="cart-summary" data-section="cart-summary">
    <span class="cart-total">{}</span>
    <span class="count-pill">{}</span>
</div>"#,
        currency.format(summary.total),
        summary.items_label()
    )
}
