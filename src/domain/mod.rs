pub mod user;
pub mod validation;

pub use user::*;
pub use validation::ValidationError;
