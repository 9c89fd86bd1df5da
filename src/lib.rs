
//! Unit parsing and conversion factors for ground-motion simulation
//! tools.
//!
//! The crate turns free-text unit tokens into closed per-dimension
//! vocabularies ([`LengthUnit`], [`TimeUnit`], [`ForceUnit`]),
//! aggregates one selection per dimension into a [`UnitSystem`], and
//! computes the scalar factor that converts quantities from one
//! system to another, including the derived acceleration factor and
//! the gravitational constant in arbitrary working units.
//!
//! Unit problems never abort a computation. Unrecognized tokens parse
//! to an `Unknown` sentinel, and conversions touching `Unknown` fall
//! back to the identity factor; both emit a warning on the `tracing`
//! diagnostic stream. Callers that prefer to stop on such conditions
//! can use the `FromStr` impls and the `try_*` factor variants, which
//! report the same conditions as errors.

pub mod event;
pub mod units;

pub use units::{
  Dimension, Unit, LengthUnit, TimeUnit, ForceUnit, UnitSystem,
  UnitParseError, UnknownUnitError, ConversionSide, STANDARD_GRAVITY,
  parse_force_unit, parse_length_unit, parse_time_unit,
  acceleration_factor, force_factor, gravity, length_factor, time_factor,
  try_acceleration_factor, try_force_factor, try_gravity, try_length_factor, try_time_factor,
};
