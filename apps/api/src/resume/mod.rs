pub mod handlers;
pub mod policy;
pub mod service;
