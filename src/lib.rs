//! marquee — a terminal movie-discovery client
//!
//! Composes two external HTTP JSON APIs (a third-party movie-metadata
//! provider and a first-party recommendation backend) behind typed async
//! clients, and drives a two-screen interactive front end: a filterable
//! catalog browse screen and a movie detail screen with rating input and
//! personalized recommendations.

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod views;
