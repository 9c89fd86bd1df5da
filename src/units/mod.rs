
//! Subsystem for parsing unit names and computing the scalar factors
//! that convert quantities between unit systems.

pub mod dimension;
pub mod factor;
pub mod parsing;
pub mod system;
pub mod unit;

pub use dimension::Dimension;
pub use factor::{
  STANDARD_GRAVITY, ConversionSide, UnknownUnitError,
  acceleration_factor, force_factor, gravity, length_factor, time_factor,
  try_acceleration_factor, try_force_factor, try_gravity, try_length_factor, try_time_factor,
};
pub use parsing::{UnitParseError, parse_force_unit, parse_length_unit, parse_time_unit};
pub use system::UnitSystem;
pub use unit::{Unit, LengthUnit, TimeUnit, ForceUnit};
