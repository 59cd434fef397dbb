//! Configuration, wire models and seed records

pub mod config;
pub mod models;
pub mod records;
