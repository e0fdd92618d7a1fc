use axum::extract::{FromRequestParts, Query};
use http::{Uri, request::Parts};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::IntoParams;

use crate::address::{WALLET_ADDRESS_FIELD, WalletAddress};
use crate::error::{ApiError, ApiResult, ValidationError};

/// Query string as received, before any rule runs.
#[derive(Debug, Deserialize)]
struct RawNonceQuery {
    #[serde(rename = "walletAddress")]
    wallet_address: Option<String>,
}

/// Query parameters of the nonce request.
///
/// Extracting this from a request runs the wallet address intake pipeline,
/// so handlers only ever see a trimmed, lower-case, well-formed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NonceQuery {
    /// Ethereum address
    #[param(value_type = String, example = "0xf605417f2D70BB260DC9b8E9952c02509C00D1E2")]
    pub wallet_address: WalletAddress,
}

impl NonceQuery {
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ValidationError> {
        let wallet_address = WalletAddress::parse_field(WALLET_ADDRESS_FIELD, raw)?;
        Ok(Self { wallet_address })
    }

    pub fn from_uri(uri: &Uri) -> ApiResult<Self> {
        let Query(raw) = Query::<RawNonceQuery>::try_from_uri(uri).map_err(|e| {
            debug!(error = %e, "rejecting undecodable nonce query");
            ApiError::from(e)
        })?;

        match Self::from_raw(raw.wallet_address.as_deref()) {
            Ok(query) => {
                debug!(wallet_address = %query.wallet_address, "nonce query accepted");
                Ok(query)
            }
            Err(e) => {
                debug!(field = e.field(), rule = e.rule(), "nonce query rejected");
                Err(e.into())
            }
        }
    }
}

impl<S> FromRequestParts<S> for NonceQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_uri(&parts.uri)
    }
}
