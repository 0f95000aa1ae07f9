//! HTTP transport for the KMA APIHUB typ01 endpoint
//!
//! The transport owns everything the feed decoders deliberately do not:
//! network I/O, the request timeout, auth-key handling, and the recoding
//! of the upstream's legacy EUC-KR bytes into UTF-8 text.
//!
//! - [`adapter`] - request construction, fetch, and resource dispatch
//! - [`encoding`] - EUC-KR byte-to-text recoding
//!
//! Upstream failures surface as distinct error values carrying the HTTP
//! status code and a best-effort decoded error body; they are never folded
//! into the decoders' "no rows" outcome.

pub mod adapter;
pub mod encoding;

// Re-export the main types for easy access
pub use adapter::KmaTransport;
pub use encoding::{decode_euc_kr, decode_euc_kr_lossy};
