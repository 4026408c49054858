//! Exchange-qualified A-share security identifiers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::SymbolError;

static SH_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^6\d{5}$").unwrap());
static SZ_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[03]\d{5}$").unwrap());
static BJ_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^8\d{5}$").unwrap());

/// Mainland stock exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Market {
    /// Shanghai Stock Exchange (上交所)
    #[serde(rename = "SH")]
    Shanghai,
    /// Shenzhen Stock Exchange (深交所)
    #[serde(rename = "SZ")]
    Shenzhen,
    /// Beijing Stock Exchange (北交所)
    #[serde(rename = "BJ")]
    Beijing,
}

impl Market {
    /// Exchange suffix used in qualified codes
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Shanghai => "SH",
            Self::Shenzhen => "SZ",
            Self::Beijing => "BJ",
        }
    }

    /// Parse an upper-case exchange suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "SH" => Some(Self::Shanghai),
            "SZ" => Some(Self::Shenzhen),
            "BJ" => Some(Self::Beijing),
            _ => None,
        }
    }

    /// Infer the exchange from the leading digit of a 6-digit code.
    pub fn infer(code: &str) -> Option<Self> {
        match code.as_bytes().first()? {
            b'6' => Some(Self::Shanghai),
            b'0' | b'3' => Some(Self::Shenzhen),
            b'8' => Some(Self::Beijing),
            _ => None,
        }
    }

    /// Human-readable code rule for this exchange.
    pub const fn rule_description(self) -> &'static str {
        match self {
            Self::Shanghai => "Shanghai codes start with 6 (main board 600xxx+, STAR market 688xxx)",
            Self::Shenzhen => "Shenzhen codes start with 0 (main board) or 3 (ChiNext)",
            Self::Beijing => "Beijing codes start with 8",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Shanghai => &SH_PATTERN,
            Self::Shenzhen => &SZ_PATTERN,
            Self::Beijing => &BJ_PATTERN,
        }
    }

    /// Check a 6-digit code against this exchange's code rule.
    pub fn accepts(self, code: &str) -> bool {
        self.pattern().is_match(code)
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Normalized security identifier, e.g. `600519.SH`.
///
/// Always a 6-digit code whose exchange suffix matches the code rule of
/// that exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecurityKey {
    code: String,
    market: Market,
}

impl SecurityKey {
    /// Validate and normalize a raw ticker.
    ///
    /// Accepts `600519`, `600519.sh` or ` 000001.SZ `. A missing suffix is
    /// inferred from the leading digit.
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        let cleaned = raw.trim().to_uppercase();
        if cleaned.is_empty() {
            return Err(SymbolError::EmptyInput);
        }

        let parts: Vec<&str> = cleaned.split('.').collect();
        let (code, suffix) = match parts.as_slice() {
            [code] => (*code, None),
            [code, suffix] => (*code, Some(*suffix).filter(|s| !s.is_empty())),
            _ => return Err(SymbolError::MalformedCode { input: cleaned }),
        };

        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SymbolError::InvalidCodeFormat {
                code: code.to_string(),
            });
        }

        let market = match suffix {
            None => Market::infer(code).ok_or_else(|| SymbolError::UnknownMarket {
                code: code.to_string(),
            })?,
            Some(suffix) => {
                Market::from_suffix(suffix).ok_or_else(|| SymbolError::UnsupportedSuffix {
                    suffix: suffix.to_string(),
                })?
            }
        };

        if !market.accepts(code) {
            return Err(SymbolError::CodeMarketMismatch {
                code: code.to_string(),
                market,
                rule: market.rule_description(),
            });
        }

        Ok(Self {
            code: code.to_string(),
            market,
        })
    }

    /// The bare 6-digit code
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn market(&self) -> Market {
        self.market
    }
}

impl fmt::Display for SecurityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.code, self.market.suffix())
    }
}

impl FromStr for SecurityKey {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SecurityKey {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SecurityKey> for String {
    fn from(value: SecurityKey) -> Self {
        value.to_string()
    }
}
