// Library for tests to access modules

pub mod clock;
pub mod config;
pub mod error;
pub mod history_repo;
pub mod models;
pub mod routes;
pub mod stats;
