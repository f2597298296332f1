pub mod config;
pub mod controller;
pub mod error;
pub mod geo;
pub mod models;
pub mod requests;
