//! Custom error types for the beacon_sense application
//!
//! This module defines custom error types and implements the necessary traits
//! to properly handle errors throughout the application.

use std::fmt;

/// Main error type for the beacon_sense application
///
/// Payload validation failures are deliberately not represented here: they
/// are request-scoped and carried by
/// [`ValidationError`](crate::validation::ValidationError), which maps
/// straight to a client error response.
#[derive(Debug)]
pub enum BeaconError {
    /// Error occurred while parsing the bind address
    AddressParse(std::net::AddrParseError),

    /// Error occurred while binding or running the server
    Io(std::io::Error),

    /// Error occurred while parsing the configuration file
    ConfigParse(json5::Error),

    /// Error occurred while sending a reading to the ingest endpoint
    Send(reqwest::Error),

    /// Generic error with a message
    Generic(String),
}

impl fmt::Display for BeaconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeaconError::AddressParse(e) => {
                write!(f, "Failed to parse network address: {e}")
            }
            BeaconError::Io(e) => {
                write!(f, "I/O error: {e}")
            }
            BeaconError::ConfigParse(e) => {
                write!(f, "Failed to parse configuration: {e}")
            }
            BeaconError::Send(e) => {
                write!(f, "Failed to send reading: {e}")
            }
            BeaconError::Generic(msg) => {
                write!(f, "Error: {msg}")
            }
        }
    }
}

impl std::error::Error for BeaconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BeaconError::AddressParse(e) => Some(e),
            BeaconError::Io(e) => Some(e),
            BeaconError::ConfigParse(e) => Some(e),
            BeaconError::Send(e) => Some(e),
            BeaconError::Generic(_) => None,
        }
    }
}

impl From<std::net::AddrParseError> for BeaconError {
    fn from(error: std::net::AddrParseError) -> Self {
        BeaconError::AddressParse(error)
    }
}

impl From<std::io::Error> for BeaconError {
    fn from(error: std::io::Error) -> Self {
        BeaconError::Io(error)
    }
}

impl From<json5::Error> for BeaconError {
    fn from(error: json5::Error) -> Self {
        BeaconError::ConfigParse(error)
    }
}

impl From<reqwest::Error> for BeaconError {
    fn from(error: reqwest::Error) -> Self {
        BeaconError::Send(error)
    }
}

impl From<&str> for BeaconError {
    fn from(message: &str) -> Self {
        BeaconError::Generic(message.to_string())
    }
}

impl From<String> for BeaconError {
    fn from(message: String) -> Self {
        BeaconError::Generic(message)
    }
}

/// Result type alias using our custom error type
pub type Result<T> = std::result::Result<T, BeaconError>;
