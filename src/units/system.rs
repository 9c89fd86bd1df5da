
//! The aggregate unit selection passed to every conversion call.

use super::parsing::{parse_length_unit, parse_time_unit, parse_force_unit};
use super::unit::{Unit, LengthUnit, TimeUnit, ForceUnit};

use serde::{Serialize, Deserialize};

/// A caller's choice of unit for each supported dimension.
///
/// The fields are independent; any combination of per-dimension units
/// is valid (meters with hours with pounds, for instance). The engine
/// reads unit systems but never mutates them.
///
/// The serde representation matches the unit dictionaries carried by
/// simulation input files, such as `{"length": "m", "time": "sec",
/// "force": "kN"}`. Missing fields deserialize to `Unknown`, and
/// `Unknown` fields are omitted on serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSystem {
  #[serde(skip_serializing_if = "LengthUnit::is_unknown")]
  pub length: LengthUnit,
  #[serde(skip_serializing_if = "TimeUnit::is_unknown")]
  pub time: TimeUnit,
  #[serde(skip_serializing_if = "ForceUnit::is_unknown")]
  pub force: ForceUnit,
}

impl UnitSystem {
  /// The SI system: meters, seconds, newtons. Used as the reference
  /// frame for [`gravity`](super::factor::gravity).
  pub const SI: UnitSystem = UnitSystem {
    length: LengthUnit::Meter,
    time: TimeUnit::Second,
    force: ForceUnit::Newton,
  };

  pub fn new(length: LengthUnit, time: TimeUnit, force: ForceUnit) -> Self {
    Self { length, time, force }
  }

  /// Builds a unit system by parsing one token per dimension through
  /// the fail-soft alias parsers. Unrecognized tokens leave the
  /// corresponding dimension `Unknown`.
  pub fn from_tokens(length: &str, time: &str, force: &str) -> Self {
    Self {
      length: parse_length_unit(length),
      time: parse_time_unit(time),
      force: parse_force_unit(force),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_default_leaves_every_dimension_unknown() {
    let system = UnitSystem::default();
    assert_eq!(system.length, LengthUnit::Unknown);
    assert_eq!(system.time, TimeUnit::Unknown);
    assert_eq!(system.force, ForceUnit::Unknown);
  }

  #[test]
  fn test_from_tokens() {
    let system = UnitSystem::from_tokens("Inches", "Seconds", "Kips");
    assert_eq!(system.length, LengthUnit::Inch);
    assert_eq!(system.time, TimeUnit::Second);
    assert_eq!(system.force, ForceUnit::Kips);
  }

  #[test]
  fn test_from_tokens_degrades_per_dimension() {
    let system = UnitSystem::from_tokens("cubits", "min", "kN");
    assert_eq!(system.length, LengthUnit::Unknown);
    assert_eq!(system.time, TimeUnit::Minute);
    assert_eq!(system.force, ForceUnit::Kilonewton);
  }

  #[test]
  fn test_deserialize_from_unit_dictionary() {
    let system: UnitSystem =
      serde_json::from_value(json!({"length": "m", "time": "sec", "force": "kN"})).unwrap();
    assert_eq!(system, UnitSystem::new(LengthUnit::Meter, TimeUnit::Second, ForceUnit::Kilonewton));
  }

  #[test]
  fn test_deserialize_with_missing_fields_defaults_to_unknown() {
    let system: UnitSystem = serde_json::from_value(json!({"length": "ft"})).unwrap();
    assert_eq!(system.length, LengthUnit::Foot);
    assert_eq!(system.time, TimeUnit::Unknown);
    assert_eq!(system.force, ForceUnit::Unknown);
  }

  #[test]
  fn test_deserialize_bad_token_degrades_to_unknown() {
    let system: UnitSystem =
      serde_json::from_value(json!({"length": "furlong", "time": "hours"})).unwrap();
    assert_eq!(system.length, LengthUnit::Unknown);
    assert_eq!(system.time, TimeUnit::Hour);
  }

  #[test]
  fn test_serialize_writes_canonical_symbols_and_omits_unknown() {
    let value = serde_json::to_value(UnitSystem::SI).unwrap();
    assert_eq!(value, json!({"length": "m", "time": "sec", "force": "N"}));

    let partial = UnitSystem {
      length: LengthUnit::Centimeter,
      ..UnitSystem::default()
    };
    assert_eq!(serde_json::to_value(partial).unwrap(), json!({"length": "cm"}));
  }
}
