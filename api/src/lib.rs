//! SavvyPulse backend: REST endpoints for categories, products, users, orders
//! and the blog feed, served by Rocket over a MongoDB document store.

pub mod config;
pub mod error;
pub mod jwt;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use rocket::{Build, Rocket};

use jwt::TokenIssuer;
use repository::{
    blog_repository::BlogRepository, category_repository::CategoryRepository,
    order_repository::OrderRepository, product_repository::ProductRepository,
    user_repository::UserRepository,
};
use services::{cors_fairing::Cors, request_logger::RequestLogger};
use store::DocumentStore;

/// Assembles the server: one repository per collection, the token issuer,
/// CORS and request logging, every route and the JSON error catchers.
pub fn build_rocket(store: Arc<dyn DocumentStore>, issuer: TokenIssuer) -> Rocket<Build> {
    rocket::build()
        .manage(CategoryRepository::new(store.clone()))
        .manage(ProductRepository::new(store.clone()))
        .manage(UserRepository::new(store.clone()))
        .manage(OrderRepository::new(store.clone()))
        .manage(BlogRepository::new(store))
        .manage(issuer)
        .attach(Cors)
        .attach(RequestLogger)
        .mount("/", routes::all())
        .register("/", routes::catchers())
}
