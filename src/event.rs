
//! Interchange structures for the time-history events exchanged with
//! the ground-motion generator.
//!
//! These are plain data carriers mirroring the JSON event documents
//! of the surrounding toolchain; field names keep their wire spelling
//! through serde renames. Assembling or generating event files is the
//! collaborators' job, not this crate's. The only behavior offered
//! here is scaling recorded values by a conversion factor, which is
//! the caller-side step of every unit conversion.

use serde::{Serialize, Deserialize};

/// A single recorded series of equally spaced samples, such as one
/// component of ground acceleration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
  #[serde(default)]
  pub name: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(rename = "dT")]
  pub dt: f64,
  #[serde(rename = "numSteps")]
  pub num_steps: usize,
  #[serde(default)]
  pub data: Vec<f64>,
}

impl TimeSeries {
  /// Multiplies every recorded sample by `factor`, typically a
  /// conversion factor obtained from the factor engine.
  pub fn scale(&mut self, factor: f64) {
    for value in &mut self.data {
      *value *= factor;
    }
  }
}

/// A load pattern binding a named time series to a degree of freedom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(rename = "timeSeries")]
  pub time_series: String,
  pub dof: u32,
}

/// One event of a simulation input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtype: Option<String>,
  #[serde(rename = "dT")]
  pub dt: f64,
  #[serde(rename = "numSteps")]
  pub num_steps: usize,
  #[serde(rename = "timeSeries")]
  pub time_series: Vec<TimeSeries>,
  pub pattern: Vec<Pattern>,
}

impl Event {
  /// Scales every time series in the event by `factor`.
  pub fn scale(&mut self, factor: f64) {
    for series in &mut self.time_series {
      series.scale(factor);
    }
  }
}
