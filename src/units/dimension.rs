
//! The physical dimensions supported by the conversion engine.

use std::fmt::{self, Formatter, Display};

/// An independent physical quantity category. Each dimension carries
/// its own closed set of units and its own base unit through which
/// conversions are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
  Length,
  Time,
  Force,
}

impl Dimension {
  pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Time, Dimension::Force];

  /// The lowercase name of this dimension, as it appears in
  /// diagnostics.
  pub fn name(self) -> &'static str {
    match self {
      Dimension::Length => "length",
      Dimension::Time => "time",
      Dimension::Force => "force",
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
