//! QR payload codec and image rendering.
pub mod adapter;
pub mod application;

pub use application::domain::payload::{decode, encode, QrCodecError, QrPayload};
