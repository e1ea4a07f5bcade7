// Checkout extensions - cart rules evaluated by the checkout host
//
// Two independent rules live here:
// - cart_transform: expands a variant into itself plus a linked free product
// - long_delivery: decides whether the long delivery warning banner is shown
//
// Rules are pure functions over the host payload. The `run`/`render` entry
// points decode the host JSON, evaluate the rule and encode the result.

pub mod cart_transform;
pub mod error;
pub mod long_delivery;

pub use error::{ExtensionError, Result};
