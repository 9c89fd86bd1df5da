
//! Conversion factors between unit systems.
//!
//! Every factor `F` satisfies `value_in_target = value_in_source * F`
//! for values of the relevant dimension. Factors for a single
//! dimension are computed through that dimension's base unit, so each
//! unit needs one calibrated constant rather than a pairwise table.
//! Identical source and target units short-circuit to exactly `1.0`;
//! base-unit round trips are only accurate to floating-point
//! rounding.
//!
//! The `f64`-returning functions are fail-soft: a conversion touching
//! an `Unknown` unit logs a warning and proceeds with the identity
//! factor. The `try_*` variants surface the same condition as a
//! [`UnknownUnitError`] for callers that want to stop instead.

use super::dimension::Dimension;
use super::system::UnitSystem;
use super::unit::Unit;

use thiserror::Error;
use tracing::warn;

use std::fmt::{self, Formatter, Display};

/// Standard gravitational acceleration, in meters per second squared.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Which operand of a conversion left a unit unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionSide {
  Source,
  Target,
}

impl Display for ConversionSide {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      ConversionSide::Source => write!(f, "source"),
      ConversionSide::Target => write!(f, "target"),
    }
  }
}

/// Error produced by the checked factor functions when a unit system
/// leaves the relevant dimension at its `Unknown` sentinel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {dimension} unit in {side} unit system")]
pub struct UnknownUnitError {
  pub dimension: Dimension,
  pub side: ConversionSide,
}

fn factor_between<U: Unit>(from: U, to: U) -> Result<f64, UnknownUnitError> {
  let from_amount = from.amount_of_base().ok_or(UnknownUnitError {
    dimension: U::DIMENSION,
    side: ConversionSide::Source,
  })?;
  let to_amount = to.amount_of_base().ok_or(UnknownUnitError {
    dimension: U::DIMENSION,
    side: ConversionSide::Target,
  })?;
  if from == to {
    return Ok(1.0);
  }
  Ok(from_amount / to_amount)
}

fn soften(result: Result<f64, UnknownUnitError>) -> f64 {
  result.unwrap_or_else(|err| {
    warn!("{}; using conversion factor 1.0", err);
    1.0
  })
}

/// Checked form of [`length_factor`].
pub fn try_length_factor(from: &UnitSystem, to: &UnitSystem) -> Result<f64, UnknownUnitError> {
  factor_between(from.length, to.length)
}

/// Checked form of [`time_factor`].
pub fn try_time_factor(from: &UnitSystem, to: &UnitSystem) -> Result<f64, UnknownUnitError> {
  factor_between(from.time, to.time)
}

/// Checked form of [`force_factor`].
pub fn try_force_factor(from: &UnitSystem, to: &UnitSystem) -> Result<f64, UnknownUnitError> {
  factor_between(from.force, to.force)
}

/// Checked form of [`acceleration_factor`].
pub fn try_acceleration_factor(from: &UnitSystem, to: &UnitSystem) -> Result<f64, UnknownUnitError> {
  let length = try_length_factor(from, to)?;
  let time = try_time_factor(from, to)?;
  Ok(length / (time * time))
}

/// Checked form of [`gravity`].
pub fn try_gravity(target: &UnitSystem) -> Result<f64, UnknownUnitError> {
  Ok(STANDARD_GRAVITY * try_acceleration_factor(&UnitSystem::SI, target)?)
}

/// Scalar multiplier converting lengths expressed in `from` to
/// lengths expressed in `to`.
pub fn length_factor(from: &UnitSystem, to: &UnitSystem) -> f64 {
  soften(try_length_factor(from, to))
}

/// Scalar multiplier converting times expressed in `from` to times
/// expressed in `to`.
pub fn time_factor(from: &UnitSystem, to: &UnitSystem) -> f64 {
  soften(try_time_factor(from, to))
}

/// Scalar multiplier converting forces expressed in `from` to forces
/// expressed in `to`.
pub fn force_factor(from: &UnitSystem, to: &UnitSystem) -> f64 {
  soften(try_force_factor(from, to))
}

/// Scalar multiplier converting accelerations expressed in `from` to
/// accelerations expressed in `to`.
///
/// Accelerations have no base unit of their own; the factor is the
/// length factor divided by the square of the time factor between the
/// same pair of systems.
pub fn acceleration_factor(from: &UnitSystem, to: &UnitSystem) -> f64 {
  let time = time_factor(from, to);
  length_factor(from, to) / (time * time)
}

/// Standard gravitational acceleration expressed in the length and
/// time units of `target`.
pub fn gravity(target: &UnitSystem) -> f64 {
  STANDARD_GRAVITY * acceleration_factor(&UnitSystem::SI, target)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::unit::{LengthUnit, TimeUnit, ForceUnit};
  use approx::assert_relative_eq;

  fn lengths(unit: LengthUnit) -> UnitSystem {
    UnitSystem { length: unit, ..UnitSystem::SI }
  }

  fn times(unit: TimeUnit) -> UnitSystem {
    UnitSystem { time: unit, ..UnitSystem::SI }
  }

  fn forces(unit: ForceUnit) -> UnitSystem {
    UnitSystem { force: unit, ..UnitSystem::SI }
  }

  fn known<U: Unit>(all: impl IntoIterator<Item = U>) -> Vec<U> {
    all.into_iter().filter(|u| !u.is_unknown()).collect()
  }

  #[test]
  fn test_identity_factor_for_equal_units() {
    for unit in known(LengthUnit::ALL) {
      assert_eq!(length_factor(&lengths(unit), &lengths(unit)), 1.0);
    }
    for unit in known(TimeUnit::ALL) {
      assert_eq!(time_factor(&times(unit), &times(unit)), 1.0);
    }
    for unit in known(ForceUnit::ALL) {
      assert_eq!(force_factor(&forces(unit), &forces(unit)), 1.0);
    }
  }

  #[test]
  fn test_round_trip_factors_cancel() {
    for a in known(LengthUnit::ALL) {
      for b in known(LengthUnit::ALL) {
        let forward = length_factor(&lengths(a), &lengths(b));
        let back = length_factor(&lengths(b), &lengths(a));
        assert_relative_eq!(forward * back, 1.0, max_relative = 1e-9);
      }
    }
    for a in known(TimeUnit::ALL) {
      for b in known(TimeUnit::ALL) {
        let forward = time_factor(&times(a), &times(b));
        let back = time_factor(&times(b), &times(a));
        assert_relative_eq!(forward * back, 1.0, max_relative = 1e-9);
      }
    }
    for a in known(ForceUnit::ALL) {
      for b in known(ForceUnit::ALL) {
        let forward = force_factor(&forces(a), &forces(b));
        let back = force_factor(&forces(b), &forces(a));
        assert_relative_eq!(forward * back, 1.0, max_relative = 1e-9);
      }
    }
  }

  #[test]
  fn test_length_constants() {
    assert_eq!(length_factor(&lengths(LengthUnit::Meter), &lengths(LengthUnit::Millimeter)), 1000.0);
    assert_eq!(length_factor(&lengths(LengthUnit::Inch), &lengths(LengthUnit::Millimeter)), 25.4);
    assert_eq!(length_factor(&lengths(LengthUnit::Centimeter), &lengths(LengthUnit::Millimeter)), 10.0);
    let foot_to_meter = length_factor(&lengths(LengthUnit::Foot), &lengths(LengthUnit::Meter));
    assert_relative_eq!(foot_to_meter, 0.3048, max_relative = 1e-12);
    let foot_to_inch = length_factor(&lengths(LengthUnit::Foot), &lengths(LengthUnit::Inch));
    assert_relative_eq!(foot_to_inch, 12.0, max_relative = 1e-12);
  }

  #[test]
  fn test_time_constants() {
    assert_eq!(time_factor(&times(TimeUnit::Hour), &times(TimeUnit::Second)), 3600.0);
    assert_eq!(time_factor(&times(TimeUnit::Minute), &times(TimeUnit::Second)), 60.0);
    assert_eq!(time_factor(&times(TimeUnit::Hour), &times(TimeUnit::Minute)), 60.0);
  }

  #[test]
  fn test_force_constants() {
    assert_eq!(force_factor(&forces(ForceUnit::Kilonewton), &forces(ForceUnit::Newton)), 1000.0);
    let kips_to_newtons = force_factor(&forces(ForceUnit::Kips), &forces(ForceUnit::Newton));
    assert_relative_eq!(kips_to_newtons, 4448.2216, max_relative = 1e-12);
    let pounds_to_newtons = force_factor(&forces(ForceUnit::Pounds), &forces(ForceUnit::Newton));
    assert_relative_eq!(pounds_to_newtons, 4.4482216, max_relative = 1e-12);
    let kips_to_pounds = force_factor(&forces(ForceUnit::Kips), &forces(ForceUnit::Pounds));
    assert_relative_eq!(kips_to_pounds, 1000.0, max_relative = 1e-9);
  }

  #[test]
  fn test_dimensions_convert_independently() {
    let from = UnitSystem::new(LengthUnit::Meter, TimeUnit::Hour, ForceUnit::Pounds);
    let to = UnitSystem::new(LengthUnit::Millimeter, TimeUnit::Second, ForceUnit::Pounds);
    assert_eq!(length_factor(&from, &to), 1000.0);
    assert_eq!(time_factor(&from, &to), 3600.0);
    assert_eq!(force_factor(&from, &to), 1.0);
  }

  #[test]
  fn test_acceleration_composes_length_and_time() {
    let pairs = [
      (UnitSystem::SI, UnitSystem::new(LengthUnit::Foot, TimeUnit::Second, ForceUnit::Kips)),
      (UnitSystem::new(LengthUnit::Inch, TimeUnit::Minute, ForceUnit::Pounds), UnitSystem::SI),
      (
        UnitSystem::new(LengthUnit::Centimeter, TimeUnit::Hour, ForceUnit::Newton),
        UnitSystem::new(LengthUnit::Millimeter, TimeUnit::Minute, ForceUnit::Kilonewton),
      ),
    ];
    for (from, to) in pairs {
      let time = time_factor(&from, &to);
      assert_eq!(acceleration_factor(&from, &to), length_factor(&from, &to) / (time * time));
    }
  }

  #[test]
  fn test_gravity_in_si_units() {
    assert_eq!(gravity(&UnitSystem::SI), STANDARD_GRAVITY);
  }

  #[test]
  fn test_gravity_in_imperial_units() {
    let imperial = UnitSystem::new(LengthUnit::Foot, TimeUnit::Second, ForceUnit::Kips);
    assert_relative_eq!(gravity(&imperial), 32.174, max_relative = 1e-4);

    let inches = UnitSystem::new(LengthUnit::Inch, TimeUnit::Second, ForceUnit::Kips);
    assert_relative_eq!(gravity(&inches), 386.089, max_relative = 1e-4);
  }

  #[test]
  fn test_unknown_unit_degrades_to_identity_factor() {
    let incomplete = UnitSystem::default();
    assert_eq!(length_factor(&incomplete, &UnitSystem::SI), 1.0);
    assert_eq!(time_factor(&UnitSystem::SI, &incomplete), 1.0);
    assert_eq!(force_factor(&incomplete, &incomplete), 1.0);
    assert_eq!(acceleration_factor(&incomplete, &UnitSystem::SI), 1.0);
    assert_eq!(gravity(&incomplete), STANDARD_GRAVITY);
  }

  #[test]
  fn test_checked_factors_name_the_offending_side() {
    let incomplete = UnitSystem::default();
    assert_eq!(
      try_length_factor(&incomplete, &UnitSystem::SI),
      Err(UnknownUnitError { dimension: Dimension::Length, side: ConversionSide::Source }),
    );
    assert_eq!(
      try_force_factor(&UnitSystem::SI, &incomplete),
      Err(UnknownUnitError { dimension: Dimension::Force, side: ConversionSide::Target }),
    );
    let no_time = UnitSystem { time: TimeUnit::Unknown, ..UnitSystem::SI };
    assert_eq!(
      try_acceleration_factor(&UnitSystem::SI, &no_time),
      Err(UnknownUnitError { dimension: Dimension::Time, side: ConversionSide::Target }),
    );
    assert!(try_gravity(&no_time).is_err());
    assert!(try_gravity(&UnitSystem::SI).is_ok());
  }

  #[test]
  fn test_unknown_unit_error_message() {
    let err = UnknownUnitError { dimension: Dimension::Time, side: ConversionSide::Source };
    assert_eq!(err.to_string(), "Unknown time unit in source unit system");
  }
}
