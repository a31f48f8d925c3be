//! Generator category tags.

use serde::{Deserialize, Serialize};

/// Category tag selecting a generator through the dispatch entry point.
///
/// Locale-backed kinds (names, places) draw from the active locale's
/// catalog; all others are locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FakeKind {
    /// Uniform true/false
    Boolean,

    /// Bounded integer
    Integer,

    /// Bounded float
    Float,

    /// Bounded-length string
    String,

    /// RFC-4122 UUID v4
    Uuid,

    /// URI with a scheme from {http, https, ftp, file, data}
    Uri,

    /// URL with a scheme from {http, https}
    Url,

    /// Calendar date, `YYYY-MM-DD`
    Date,

    /// RFC 3339 date-time with a fixed-set offset
    DateTime,

    /// Unix epoch seconds
    Timestamp,

    /// Dotted-quad IPv4 address
    Ipv4,

    /// Colon-hex IPv6 address
    Ipv6,

    /// Two-label hostname
    Hostname,

    /// Base64-encoded random bytes
    Byte,

    /// Raw byte blob
    Binary,

    /// Password with all four character classes guaranteed
    Password,

    /// Identifier (numeric, string, uuid, ulid, or alphanumeric)
    Id,

    /// Email address
    Email,

    /// Locale-backed first name
    FirstName,

    /// Locale-backed last name
    LastName,

    /// Locale-backed full name
    FullName,

    /// Locale-backed city
    City,

    /// Locale-backed state or region
    State,

    /// Locale-backed country
    Country,

    /// Locale-backed street address
    StreetAddress,

    /// Locale-backed company name
    Company,

    /// Locale-backed word
    Word,
}

impl FakeKind {
    /// The snake_case name of this kind, as used in serialized options.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Uuid => "uuid",
            Self::Uri => "uri",
            Self::Url => "url",
            Self::Date => "date",
            Self::DateTime => "date_time",
            Self::Timestamp => "timestamp",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Hostname => "hostname",
            Self::Byte => "byte",
            Self::Binary => "binary",
            Self::Password => "password",
            Self::Id => "id",
            Self::Email => "email",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::FullName => "full_name",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::StreetAddress => "street_address",
            Self::Company => "company",
            Self::Word => "word",
        }
    }
}

impl std::fmt::Display for FakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
