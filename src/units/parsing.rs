
//! Alias-based parsing of unit name tokens.
//!
//! Each dimension owns a static table mapping lowercase aliases to
//! vocabulary values. The tables are built once on first use and
//! never mutated, so concurrent lookups need no synchronization.
//!
//! Two parsing surfaces are offered. The `FromStr` impls are strict
//! and report an error naming the offending token and dimension. The
//! `parse_*` entry points wrap them with the fail-soft contract the
//! enclosing toolchain expects: a warning on the diagnostic stream
//! and the dimension's `Unknown` sentinel, never a hard failure.

use super::dimension::Dimension;
use super::unit::{LengthUnit, TimeUnit, ForceUnit};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::warn;

use std::collections::HashMap;
use std::str::FromStr;

/// Error produced when a token matches no known alias for the
/// requested dimension.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse '{token}' as a {dimension} unit")]
pub struct UnitParseError {
  pub token: String,
  pub dimension: Dimension,
}

impl UnitParseError {
  pub fn new(token: impl Into<String>, dimension: Dimension) -> Self {
    Self { token: token.into(), dimension }
  }
}

static LENGTH_ALIASES: Lazy<HashMap<&'static str, LengthUnit>> = Lazy::new(|| {
  [
    ("m", LengthUnit::Meter),
    ("meter", LengthUnit::Meter),
    ("meters", LengthUnit::Meter),
    ("cm", LengthUnit::Centimeter),
    ("centimeter", LengthUnit::Centimeter),
    ("centimeters", LengthUnit::Centimeter),
    ("mm", LengthUnit::Millimeter),
    ("millimeter", LengthUnit::Millimeter),
    ("millimeters", LengthUnit::Millimeter),
    ("in", LengthUnit::Inch),
    ("inch", LengthUnit::Inch),
    ("inches", LengthUnit::Inch),
    ("ft", LengthUnit::Foot),
    ("foot", LengthUnit::Foot),
    ("feet", LengthUnit::Foot),
  ].into_iter().collect()
});

static TIME_ALIASES: Lazy<HashMap<&'static str, TimeUnit>> = Lazy::new(|| {
  [
    ("s", TimeUnit::Second),
    ("sec", TimeUnit::Second),
    ("second", TimeUnit::Second),
    ("seconds", TimeUnit::Second),
    ("min", TimeUnit::Minute),
    ("minute", TimeUnit::Minute),
    ("minutes", TimeUnit::Minute),
    ("hr", TimeUnit::Hour),
    ("hour", TimeUnit::Hour),
    ("hours", TimeUnit::Hour),
  ].into_iter().collect()
});

static FORCE_ALIASES: Lazy<HashMap<&'static str, ForceUnit>> = Lazy::new(|| {
  [
    ("n", ForceUnit::Newton),
    ("newton", ForceUnit::Newton),
    ("newtons", ForceUnit::Newton),
    ("kn", ForceUnit::Kilonewton),
    ("kilonewton", ForceUnit::Kilonewton),
    ("kilonewtons", ForceUnit::Kilonewton),
    ("lb", ForceUnit::Pounds),
    ("lbs", ForceUnit::Pounds),
    ("pounds", ForceUnit::Pounds),
    ("k", ForceUnit::Kips),
    ("kips", ForceUnit::Kips),
  ].into_iter().collect()
});

fn lookup<U: Copy>(
  table: &HashMap<&'static str, U>,
  token: &str,
  dimension: Dimension,
) -> Result<U, UnitParseError> {
  let normalized = token.to_ascii_lowercase();
  table.get(normalized.as_str())
    .copied()
    .ok_or_else(|| UnitParseError::new(token, dimension))
}

impl FromStr for LengthUnit {
  type Err = UnitParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lookup(&LENGTH_ALIASES, s, Dimension::Length)
  }
}

impl FromStr for TimeUnit {
  type Err = UnitParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lookup(&TIME_ALIASES, s, Dimension::Time)
  }
}

impl FromStr for ForceUnit {
  type Err = UnitParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lookup(&FORCE_ALIASES, s, Dimension::Force)
  }
}

/// Parses a length unit token, falling back to
/// [`LengthUnit::Unknown`] with a logged diagnostic when the token is
/// not recognized.
pub fn parse_length_unit(token: &str) -> LengthUnit {
  token.parse().unwrap_or_else(|err: UnitParseError| {
    warn!("{}", err);
    LengthUnit::Unknown
  })
}

/// Parses a time unit token, falling back to [`TimeUnit::Unknown`]
/// with a logged diagnostic when the token is not recognized.
pub fn parse_time_unit(token: &str) -> TimeUnit {
  token.parse().unwrap_or_else(|err: UnitParseError| {
    warn!("{}", err);
    TimeUnit::Unknown
  })
}

/// Parses a force unit token, falling back to [`ForceUnit::Unknown`]
/// with a logged diagnostic when the token is not recognized.
pub fn parse_force_unit(token: &str) -> ForceUnit {
  token.parse().unwrap_or_else(|err: UnitParseError| {
    warn!("{}", err);
    ForceUnit::Unknown
  })
}
