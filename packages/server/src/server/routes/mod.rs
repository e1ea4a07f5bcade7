// HTTP routes
pub mod cars;
pub mod extensions;
pub mod graphql;
pub mod health;

pub use cars::*;
pub use extensions::*;
pub use graphql::*;
pub use health::*;
