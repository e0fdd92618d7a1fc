use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Query field name the address arrives under.
pub const WALLET_ADDRESS_FIELD: &str = "walletAddress";

/// Prefix every account address carries after normalization.
pub const ADDRESS_PREFIX: &str = "0x";
/// Number of hex digits after the prefix.
pub const ADDRESS_HEX_LEN: usize = 40;
/// Full length of a normalized address, prefix included.
pub const ADDRESS_LEN: usize = ADDRESS_PREFIX.len() + ADDRESS_HEX_LEN;

/// Trim surrounding whitespace and lower-case the value.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lexical check for an Ethereum account address.
///
/// Hex digits may be in any case, the prefix must already be `0x`.
/// No checksum is verified.
pub fn is_address_format(value: &str) -> bool {
    value.len() == ADDRESS_LEN
        && value.starts_with(ADDRESS_PREFIX)
        && value[ADDRESS_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit())
}

/// Run the intake pipeline for the wallet address field.
///
/// Order matters:
/// 1. presence (absent, empty or blank -> `EmptyField`)
/// 2. normalization (trim + lower-case)
/// 3. format check on the normalized value (-> `InvalidFormat`)
///
/// On success the normalized string is returned, nothing else leaks out on failure.
pub fn process(raw: Option<&str>) -> Result<String, ValidationError> {
    process_field(WALLET_ADDRESS_FIELD, raw)
}

/// Same as [`process`] but reports errors against `field`.
pub fn process_field(field: &str, raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = match raw {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(ValidationError::empty(field)),
    };

    let normalized = normalize(raw);
    if !is_address_format(&normalized) {
        return Err(ValidationError::invalid_format(field));
    }

    Ok(normalized)
}

/// A wallet address that went through [`process`].
///
/// Always 42 characters, `0x` + lower-case hex, no padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "0xf605417f2D70BB260DC9b8E9952c02509C00D1E2")]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        process(raw).map(Self)
    }

    pub fn parse_field(field: &str, raw: Option<&str>) -> Result<Self, ValidationError> {
        process_field(field, raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Typed form for downstream chain logic.
    pub fn to_address(&self) -> Result<Address, ValidationError> {
        Address::from_str(&self.0).map_err(|_| ValidationError::invalid_format(WALLET_ADDRESS_FIELD))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<&str> for WalletAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(Some(&value))
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::parse(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}
