use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const ADDRESS_LENGTH: usize = 20;
pub const ASSET_ID_LENGTH: usize = 20;

/// Seconds per day-index window.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Token amount in the smallest unit (wei-scale integers, never floats).
pub type Amount = u128;

/// Unix timestamp in seconds, supplied by the environment per call.
pub type Timestamp = u64;

/// Day bucket for the daily distribution cap: `floor(timestamp / 86400)`.
pub type DayIndex = u64;

// --- NewTypes ---

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// The null account. Never a valid claim or mint recipient.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Parse a hex address, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).ok()?;
        if bytes.len() != ADDRESS_LENGTH {
            return None;
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(&bytes);
        Some(Address(arr))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).ok_or_else(|| serde::de::Error::custom("Invalid address"))
    }
}

/// Opaque asset identifier, used only by foreign-fund recovery.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AssetId(pub [u8; ASSET_ID_LENGTH]);

impl AssetId {
    pub fn from_hex(s: &str) -> Option<Self> {
        Address::from_hex(s).map(|a| AssetId(a.0))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId(0x{})", hex::encode(self.0))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AssetId::from_hex(&s).ok_or_else(|| serde::de::Error::custom("Invalid asset id"))
    }
}

/// Day bucket for a timestamp.
pub fn day_index(now: Timestamp) -> DayIndex {
    now / SECONDS_PER_DAY
}
