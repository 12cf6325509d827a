// src/services/mod.rs

pub mod memory_store;
pub mod mongo_store;
pub mod payment_service;
pub mod store;
