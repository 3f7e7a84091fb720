// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod demo;
pub mod models;
pub mod resource_client;
pub mod routes;
pub mod series;
pub mod status;
pub mod version;
