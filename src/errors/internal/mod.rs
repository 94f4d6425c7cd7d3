pub mod validation;

pub use validation::ValidationError;
