pub mod claims;
pub mod jwt_helper;

pub use jwt_helper::{AuthError, TokenIssuer};
