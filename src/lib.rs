//! # beacon_sense Library
//!
//! This library provides the core functionality for the beacon_sense telemetry
//! service. beacon_sense is a minimal ingestion and configuration endpoint for
//! a single remote temperature/humidity sensor: the device pushes readings
//! over HTTP, the server keeps only the most recent one, and a browser
//! dashboard reads it back and manages a set of alert-threshold values.
//!
//! ## Overview
//!
//! The library is organized into several modules that handle different aspects
//! of the application:
//!
//! - `store`: Owns the current reading and threshold records
//! - `validation`: Checks inbound payloads before any record is replaced
//! - `handlers`: Maps the HTTP operations onto the store
//! - `server`: Runs the web server and manages routes
//! - `config`: Handles deployment configuration
//! - `simulator`: Simulated device that feeds the ingest endpoint
//! - `error`: Defines custom error types for consistent error handling
//!
//! ## Getting Started
//!
//! To use this library in your own application, you'll typically use the
//! server module to start the web server with the `run` function:
//!
//! ```no_run
//! use beacon_sense::server;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), beacon_sense::error::BeaconError> {
//!     let cancel_token = CancellationToken::new();
//!
//!     server::run(8000, None, cancel_token).await
//! }
//! ```
//!
//! ## Design notes
//!
//! State is process-local and explicitly ephemeral: nothing survives a
//! restart, and the service models exactly one device. The reading and the
//! thresholds are independent records behind independent locks, so a reader
//! fetching both via two calls may observe them from different points in
//! time, but never a half-replaced record.

/// Custom error types module
///
/// Defines the `BeaconError` enum and related functionality for consistent
/// error handling across the application.
pub mod error;

/// Configuration management module
///
/// Handles loading deployment settings (bind address, static asset
/// directory) from an optional JSON5 file.
pub mod config;

/// State store module
///
/// Holds the single current reading and the single current threshold
/// configuration, with atomic get/replace operations on each.
pub mod store;

/// Validation module
///
/// Structural checks on inbound JSON payloads. A payload that fails here
/// never reaches the store.
pub mod validation;

/// Request handlers module
///
/// Thin compositions of validation and store access, one per HTTP
/// operation, plus the dashboard page handler.
pub mod handlers;

/// Server operations module
///
/// Contains the main web server implementation using the Axum framework.
/// This module sets up routes, serves static files, and manages graceful
/// shutdown of the server.
pub mod server;

/// Device simulator module
///
/// A producer that fabricates sensor readings and pushes them to the
/// ingest endpoint on a fixed interval, standing in for the real device.
pub mod simulator;
