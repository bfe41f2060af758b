//! Signage Admin
//!
//! Server-rendered admin dashboard for digital-signage screens.
//!
//! This library provides:
//! - Screen, organization and ad account pages backed by the remote REST API
//! - Campaign sequencing with a live playback preview (Server-Sent Events)
//! - One-shot playlist push to devices through a WebSocket relay
//! - Login / password reset proxies with an HTTP-only session cookie

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod activity;
pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod relay;
pub mod schedule;
pub mod session;
pub mod ui;
