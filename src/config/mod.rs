//! Configuration modules for the CampusKart API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables.
//!
//! - [`cors`]: allowed front-end origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: token secrets and lifetimes (separate end-user and admin keys)

pub mod cors;
pub mod database;
pub mod jwt;
