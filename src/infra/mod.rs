//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-bound collaborators: the HTTP diff service,
//! preference storage, the clipboard and platform probing.

pub mod app_config;
pub mod clipboard;
pub mod diff_service;
pub mod platform;
pub mod preferences;
