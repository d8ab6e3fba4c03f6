//! Product catalog domain, validation and JSON file persistence.

pub mod auth;
pub mod context;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;
