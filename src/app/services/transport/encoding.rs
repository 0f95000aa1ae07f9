//! EUC-KR byte-to-text recoding
//!
//! The upstream serves all typ01 responses in EUC-KR. Success bodies are
//! decoded strictly so that malformed bytes surface as an encoding error
//! rather than silently garbled text; error bodies are decoded lossily,
//! since a best-effort message beats none when reporting an upstream
//! failure.

use crate::{Error, Result};
use encoding_rs::EUC_KR;

/// Decode EUC-KR bytes into UTF-8 text, failing on malformed sequences
pub fn decode_euc_kr(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = EUC_KR.decode(bytes);

    if had_errors {
        return Err(Error::encoding(
            "response body contains byte sequences that are not valid EUC-KR",
        ));
    }

    Ok(text.into_owned())
}

/// Decode EUC-KR bytes into UTF-8 text, replacing malformed sequences
pub fn decode_euc_kr_lossy(bytes: &[u8]) -> String {
    EUC_KR.decode(bytes).0.into_owned()
}
