//! Shopping cart module.
//!
//! Contains the quantity ledger, the quantity parsing and clamping rules,
//! and the derived summary.

mod ledger;
mod summary;

pub use ledger::{
    clamp_quantity, decrement_quantity, increment_quantity, parse_quantity, CartLedger,
    MAX_QUANTITY, MIN_QUANTITY,
};
pub use summary::CartSummary;
