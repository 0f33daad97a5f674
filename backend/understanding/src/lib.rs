pub mod ocr;
pub mod signer;

pub use ocr::{parse_ocr_response, OcrClient, OcrEndpoint};
pub use signer::{generate_salt, sign, timestamp_millis, SignedHeaders};
