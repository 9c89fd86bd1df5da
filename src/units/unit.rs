
//! Closed unit vocabularies for each supported [`Dimension`].
//!
//! Every enumeration carries an `Unknown` sentinel, used both when a
//! token fails to parse and when a caller never specified a unit.
//! The sentinel deliberately has no conversion factor; the factor
//! engine treats it as a recoverable condition rather than a panic.

use super::dimension::Dimension;
use super::parsing::{parse_length_unit, parse_time_unit, parse_force_unit};

use serde::{Serialize, Serializer, Deserialize, Deserializer};

use std::fmt::{self, Formatter, Display};

/// Common interface of the per-dimension unit enumerations.
///
/// Each dimension designates one of its units as the base unit
/// (millimeter for length, second for time, newton for force), and
/// all conversions within the dimension pass through it. The base
/// units are fixed; the conversion constants are calibrated against
/// them and must not be re-derived against a different base.
pub trait Unit: Copy + Eq {
  /// The dimension this unit measures.
  const DIMENSION: Dimension;

  /// The amount of the dimension's base unit that is equal to one of
  /// this unit, or `None` for the `Unknown` sentinel.
  fn amount_of_base(self) -> Option<f64>;

  /// Canonical short symbol for this unit, as written in the unit
  /// dictionaries of simulation input files.
  fn symbol(self) -> &'static str;

  /// Whether this is the dimension's `Unknown` sentinel.
  fn is_unknown(&self) -> bool {
    self.amount_of_base().is_none()
  }
}

/// A unit of length. The base unit is the millimeter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
  Meter,
  Centimeter,
  Millimeter,
  Inch,
  Foot,
  #[default]
  Unknown,
}

impl LengthUnit {
  pub const ALL: [LengthUnit; 6] = [
    LengthUnit::Meter,
    LengthUnit::Centimeter,
    LengthUnit::Millimeter,
    LengthUnit::Inch,
    LengthUnit::Foot,
    LengthUnit::Unknown,
  ];
}

impl Unit for LengthUnit {
  const DIMENSION: Dimension = Dimension::Length;

  fn amount_of_base(self) -> Option<f64> {
    match self {
      LengthUnit::Meter => Some(1000.0),
      LengthUnit::Centimeter => Some(10.0),
      LengthUnit::Millimeter => Some(1.0),
      LengthUnit::Inch => Some(25.4),
      LengthUnit::Foot => Some(304.8),
      LengthUnit::Unknown => None,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      LengthUnit::Meter => "m",
      LengthUnit::Centimeter => "cm",
      LengthUnit::Millimeter => "mm",
      LengthUnit::Inch => "in",
      LengthUnit::Foot => "ft",
      LengthUnit::Unknown => "unknown",
    }
  }
}

/// A unit of time. The base unit is the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeUnit {
  Second,
  Minute,
  Hour,
  #[default]
  Unknown,
}

impl TimeUnit {
  pub const ALL: [TimeUnit; 4] = [
    TimeUnit::Second,
    TimeUnit::Minute,
    TimeUnit::Hour,
    TimeUnit::Unknown,
  ];
}

impl Unit for TimeUnit {
  const DIMENSION: Dimension = Dimension::Time;

  fn amount_of_base(self) -> Option<f64> {
    match self {
      TimeUnit::Second => Some(1.0),
      TimeUnit::Minute => Some(60.0),
      TimeUnit::Hour => Some(3600.0),
      TimeUnit::Unknown => None,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      TimeUnit::Second => "sec",
      TimeUnit::Minute => "min",
      TimeUnit::Hour => "hr",
      TimeUnit::Unknown => "unknown",
    }
  }
}

/// A unit of force. The base unit is the newton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ForceUnit {
  Newton,
  Kilonewton,
  Pounds,
  Kips,
  #[default]
  Unknown,
}

impl ForceUnit {
  pub const ALL: [ForceUnit; 5] = [
    ForceUnit::Newton,
    ForceUnit::Kilonewton,
    ForceUnit::Pounds,
    ForceUnit::Kips,
    ForceUnit::Unknown,
  ];
}

impl Unit for ForceUnit {
  const DIMENSION: Dimension = Dimension::Force;

  fn amount_of_base(self) -> Option<f64> {
    match self {
      ForceUnit::Newton => Some(1.0),
      ForceUnit::Kilonewton => Some(1000.0),
      ForceUnit::Pounds => Some(4.4482216),
      ForceUnit::Kips => Some(4448.2216),
      ForceUnit::Unknown => None,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      ForceUnit::Newton => "N",
      ForceUnit::Kilonewton => "kN",
      ForceUnit::Pounds => "lbs",
      ForceUnit::Kips => "kips",
      ForceUnit::Unknown => "unknown",
    }
  }
}

impl Display for LengthUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl Display for TimeUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl Display for ForceUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

// Serialization writes the canonical symbol; deserialization accepts
// any alias and degrades to `Unknown` on unrecognized tokens instead
// of rejecting the document.

impl Serialize for LengthUnit {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.symbol())
  }
}

impl<'de> Deserialize<'de> for LengthUnit {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let token = String::deserialize(deserializer)?;
    Ok(parse_length_unit(&token))
  }
}

impl Serialize for TimeUnit {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.symbol())
  }
}

impl<'de> Deserialize<'de> for TimeUnit {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let token = String::deserialize(deserializer)?;
    Ok(parse_time_unit(&token))
  }
}

impl Serialize for ForceUnit {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.symbol())
  }
}

impl<'de> Deserialize<'de> for ForceUnit {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let token = String::deserialize(deserializer)?;
    Ok(parse_force_unit(&token))
  }
}
