pub mod nonce_query;

pub use nonce_query::NonceQuery;
