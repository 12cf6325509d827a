//! StudentLodge backend: REST endpoints over a document store for meals,
//! users, reviews, meal requests and upcoming meals, plus payment intents.

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
