//! Foundation types for the NHK4S TV pointer.
//!
//! This crate contains the platform-agnostic types shared by the pointer
//! controller and its hosts: remote-control input events, screen geometry,
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
