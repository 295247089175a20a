pub mod api_response;
pub mod document;
pub mod product;
pub mod user;
