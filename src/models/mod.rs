//! Core data models for the employee directory service.
//!
//! This module contains the domain representation of a directory record
//! and its wire-level counterpart.

mod employee;

pub use employee::{Employee, EmployeeRow};
