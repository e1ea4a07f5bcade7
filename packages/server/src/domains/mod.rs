// Domain modules
pub mod cars;
