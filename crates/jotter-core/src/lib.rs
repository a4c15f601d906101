//! Core types and trait definitions for the Jotter note service.
//!
//! This crate is deliberately free of HTTP and database dependencies. It holds
//! the data model, the storage and correction traits the request pipeline is
//! written against, and the span-reconstruction algorithm shared by every
//! spell-check oracle.

pub mod account;
pub mod correction;
pub mod error;
pub mod note;
pub mod store;

pub use error::{Error, Result};
