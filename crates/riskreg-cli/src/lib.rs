//! riskreg-cli: Command-line front end for the risk register.
//!
//! Wraps the repository service with subcommands for the five register
//! operations plus two presentation views: the likelihood×severity matrix
//! and CSV export.

pub mod config;
pub mod csv;
pub mod matrix;
pub mod rating;
