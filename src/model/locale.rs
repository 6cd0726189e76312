/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Jurisdiction selecting which identity host the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// betfair.com, used for UK and every unlisted locale
    #[default]
    Global,
    /// betfair.au
    Australia,
    /// betfair.es
    Spain,
    /// betfair.it
    Italy,
    /// betfair.ro
    Romania,
    /// betfair.se
    Sweden,
}

impl Locale {
    fn tld(self) -> &'static str {
        match self {
            Locale::Global => "com",
            Locale::Australia => "au",
            Locale::Spain => "es",
            Locale::Italy => "it",
            Locale::Romania => "ro",
            Locale::Sweden => "se",
        }
    }

    /// Base URL of the identity service, with trailing slash
    #[must_use]
    pub fn identity_uri(self) -> String {
        format!("https://identitysso.betfair.{}/api/", self.tld())
    }

    /// Base URL of the certificate-authenticated identity service, with trailing slash
    #[must_use]
    pub fn identity_cert_uri(self) -> String {
        format!("https://identitysso-cert.betfair.{}/api/", self.tld())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "australia" => Locale::Australia,
            "spain" => Locale::Spain,
            "italy" => Locale::Italy,
            "romania" => Locale::Romania,
            "sweden" => Locale::Sweden,
            _ => Locale::Global,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Locale::Global => "global",
            Locale::Australia => "australia",
            Locale::Spain => "spain",
            Locale::Italy => "italy",
            Locale::Romania => "romania",
            Locale::Sweden => "sweden",
        };
        write!(f, "{} (betfair.{})", name, self.tld())
    }
}
