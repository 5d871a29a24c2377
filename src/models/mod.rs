pub mod activity;
pub mod auth;
pub mod basket;
pub mod car;
pub mod city;
pub mod flight;
pub mod hotel;
pub mod review;
pub mod show;
pub mod timestamp;
pub mod tour;
pub mod transport;
