//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod badges;
pub mod browse;
pub mod query;
pub mod show;
