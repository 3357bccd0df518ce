//! Employee Directory Service
//!
//! This crate exposes a small HTTP API that proxies and reshapes data from
//! an upstream employee-directory REST service: list, keyed lookup, create
//! and delete are forwarded, and name search plus salary aggregates are
//! derived from the fetched collection.

#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
