use mongodb::bson::Document;

use super::document::insert_default;

pub const COLLECTION: &str = "users";

pub const EMAIL: &str = "email";
pub const TYPE: &str = "type";
pub const IS_VERIFIED: &str = "isVerified";

pub const DEFAULT_TYPE: &str = "buyer";

/// New accounts are unverified buyers unless the body says otherwise.
pub fn with_defaults(mut user: Document) -> Document {
    insert_default(&mut user, TYPE, DEFAULT_TYPE);
    insert_default(&mut user, IS_VERIFIED, false);
    user
}

pub fn email_of(user: &Document) -> Option<&str> {
    user.get_str(EMAIL).ok().filter(|email| !email.is_empty())
}
