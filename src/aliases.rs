// src/aliases.rs
//! secure-gate wrappers for the secrets that pass through the exporter

pub use secure_gate::dynamic_alias;

// OTP seed as stored by 2FAuth (usually base32 text)
dynamic_alias!(TotpSecret, String);
