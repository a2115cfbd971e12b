//! HTTP server module for the AQI web front-end.
//!
//! This module provides an axum-based HTTP server that exposes the predictor,
//! the trend aggregation and the HTML pages. It reuses the service layer and
//! DTOs from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Form parsing and validation                            │
//! │  - JSON / HTML responses                                  │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Monthly trend aggregation with fallback                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Load-once resources                                      │
//! │  - Predictor (Ready | Disabled)                           │
//! │  - Dataset (Option)                                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
