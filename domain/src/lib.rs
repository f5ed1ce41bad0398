pub mod access;
pub mod error;
pub mod models;
pub mod ports;
pub mod render;
pub mod session;
