//! Tribology models.
//!
//! This module contains models of lubricants and their flow properties.

pub mod lubricant;
