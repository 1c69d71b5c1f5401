pub mod clock;
pub mod config;
pub mod extractor;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod routes;
pub mod search;
pub mod state;
pub mod utils;
pub mod validation;
