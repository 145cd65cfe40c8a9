//! Shared utilities for Agora.

pub mod logger;
