//! String-encoded serde support and `FromStr` impls.
//!
//! Interval values embed into host formats as the single interval string the
//! serializers produce; deserialization runs the corresponding parser. For
//! any string this library itself produced the round trip is bit-exact.

use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RfcError;
use crate::rfc::iso8601::build::{serialize_interval, serialize_repeating};
use crate::rfc::iso8601::core::{Interval, Repeating};
use crate::rfc::iso8601::parse::{parse_interval, parse_repeating};

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = serialize_interval(self).map_err(S::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_interval(&s).map_err(D::Error::custom)
    }
}

impl FromStr for Interval {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}

impl Serialize for Repeating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = serialize_repeating(self).map_err(S::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Repeating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_repeating(&s).map_err(D::Error::custom)
    }
}

impl FromStr for Repeating {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_repeating(s)
    }
}
