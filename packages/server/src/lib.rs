// Fleet Admin - API Core
//
// Back-office API for the vehicle inventory (filterable, sortable car listing)
// plus HTTP hosting for the checkout extensions.
//
// Domains are organized as domains/<name>/{models, data, actions}.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
