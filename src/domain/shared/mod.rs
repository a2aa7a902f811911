pub mod errors;
pub mod probe;
