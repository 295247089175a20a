use mongodb::bson::Document;

use super::document::insert_default;

pub const COLLECTION: &str = "products";

pub const TYPE: &str = "type";
pub const SELLER: &str = "seller";

/// Boolean product fields flipped by the toggle routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFlag {
    Available,
    Advertised,
    WishListed,
}

impl ProductFlag {
    pub fn field(self) -> &'static str {
        match self {
            ProductFlag::Available => "isAvailable",
            ProductFlag::Advertised => "isAdvertised",
            ProductFlag::WishListed => "isWishListed",
        }
    }

    /// Value a new product gets when the seller leaves the flag out.
    pub fn default_value(self) -> bool {
        matches!(self, ProductFlag::Available)
    }
}

/// Fills in any flag the body omitted: listed as available, not advertised, not wish-listed.
pub fn with_defaults(mut product: Document) -> Document {
    for flag in [
        ProductFlag::Available,
        ProductFlag::Advertised,
        ProductFlag::WishListed,
    ] {
        insert_default(&mut product, flag.field(), flag.default_value());
    }
    product
}
