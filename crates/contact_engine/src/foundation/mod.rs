//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the collision core:
//! - Math types and operations
//! - Handle-based body storage
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
