//! Product card renderer.

use crate::escape_html;
use souq_core::cart::{clamp_quantity, MAX_QUANTITY, MIN_QUANTITY};
use souq_core::catalog::{Product, StockStatus};
use souq_core::money::Currency;

/// Render one product card.
///
/// `quantity` is the pending value of the card's quantity field and is
/// clamped the same way the cart clamps it. A fresh grid renders every
/// card at quantity 1.
pub fn render_card(product: &Product, quantity: i64, currency: Currency) -> String {
    let quantity = clamp_quantity(quantity);
    let name = escape_html(&product.name);

    let badge = match &product.badge {
        Some(text) => format!(
            r#"
        <span class="badge">{}</span>"#,
            escape_html(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<article class="card" role="listitem" tabindex="0" data-product-id="{id}">
    <div class="media">
        <img src="{image}" alt="{name}" loading="lazy">{badge}
    </div>
    <div class="content">
        <div class="title">{name}</div>
        <p class="desc">{desc}</p>
        <div class="price-row">
            <div class="price">{price}</div>
            {qty_control}
        </div>
        <div class="item-total">Total: {line_total}</div>
        <div class="actions">
            {add_button}
            <button class="btn secondary" type="button" data-action="check-availability" data-product-id="{id}" aria-label="Check availability for {name}">Check Availability</button>
            <span class="status" aria-live="polite"></span>
        </div>
    </div>
</article>"#,
        id = product.id,
        image = escape_html(&product.image),
        name = name,
        badge = badge,
        desc = escape_html(&product.description),
        price = currency.format(product.price),
        qty_control = render_qty_control(quantity),
        line_total = currency.format(product.line_total(quantity)),
        add_button = render_add_button(product, &name),
    )
}

/// Render the availability status revealed by the check-availability
/// action.
pub fn render_status(stock: StockStatus) -> String {
    format!(
        r#"<span class="status {}" aria-live="polite">{}</span>"#,
        stock.css_class(),
        stock.label()
    )
}

fn render_add_button(product: &Product, name: &str) -> String {
    if product.is_purchasable() {
        format!(
            r#"<button class="btn" type="button" data-action="add-to-cart" data-product-id="{}" aria-label="Add {} to cart">Add to Cart</button>"#,
            product.id, name
        )
    } else {
        format!(
            r#"<button class="btn" type="button" disabled aria-label="{} is out of stock">Out of Stock</button>"#,
            name
        )
    }
}

fn render_qty_control(quantity: i64) -> String {
    format!(
        r#"<div class="qty">
                <button type="button" data-action="decrement" aria-label="Decrease quantity">&minus;</button>
                <input type="number" min="{}" max="{}" value="{}" inputmode="numeric" aria-label="Quantity">
                <button type="button" data-action="increment" aria-label="Increase quantity">+</button>
            </div>"#,
        MIN_QUANTITY, MAX_QUANTITY, quantity
    )
}
