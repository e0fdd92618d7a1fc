//! Wallet address intake for the auth nonce query.
//!
//! The `walletAddress` query parameter must be present, must be an Ethereum
//! account address and reaches handlers trimmed and lower-cased.

pub mod address;
pub mod config;
pub mod dto;
pub mod error;
pub mod telemetry;

pub use address::{WalletAddress, process};
pub use config::Config;
pub use dto::NonceQuery;
pub use error::{ApiError, ApiResult, ValidationError};
