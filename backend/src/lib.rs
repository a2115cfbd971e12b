//! # AQI Web
//!
//! Air Quality Index prediction and trend service.
//!
//! This crate serves a small web front-end that turns air-quality sensor
//! readings into an AQI estimate using a pre-trained regression model,
//! classifies the estimate into a health-risk band, and charts historical
//! monthly pollutant trends aggregated from a CSV dataset.
//!
//! ## Features
//!
//! - **Classification**: Fixed six-band AQI table with health guidance
//! - **Prediction**: JSON regression artifacts (linear, tree ensembles, stacks)
//! - **Trends**: Per-month means of AQI, PM2.5 and PM10 with a placeholder fallback
//! - **HTTP API**: Landing and trends pages plus JSON endpoints
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: TOML + environment configuration
//! - [`models`]: Category table, feature vector, dataset loading
//! - [`predictor`]: Regression artifacts and the load-once predictor handle
//! - [`services`]: Trend aggregation and fallback series
//! - [`routes`]: Route-specific data types and paths
//! - [`pages`]: Server-rendered HTML
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod models;
pub mod pages;
pub mod predictor;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
