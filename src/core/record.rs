//! Account rows as read from the 2FAuth database
//!
//! A `SourceRecord` lives for one export pass. Nothing is parsed or
//! normalized: the three columns are carried through as opaque text.

use std::fmt;

use crate::aliases::TotpSecret;

pub struct SourceRecord {
    /// Issuer label, e.g. "GitHub"
    pub service: String,
    /// Username or e-mail shown next to the code
    pub account: String,
    pub secret: TotpSecret,
}

impl SourceRecord {
    pub fn new(
        service: impl Into<String>,
        account: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
            secret: TotpSecret::new(secret.into()),
        }
    }

    /// Borrow the OTP seed for serialization
    pub fn secret(&self) -> &str {
        self.secret.expose_secret().as_str()
    }
}

// Never print the seed
impl fmt::Debug for SourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRecord")
            .field("service", &self.service)
            .field("account", &self.account)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
