extern crate chrono;
extern crate tokio;

pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod listing;
pub mod logger;
pub mod models;
pub mod session;
pub mod web;
