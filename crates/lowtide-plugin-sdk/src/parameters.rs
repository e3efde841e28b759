use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a parameter, as seen by the host and in persisted
/// state ("VOL", "LPF").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterId(String);

impl ParameterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParameterId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value range of a continuous parameter.
///
/// `skew` describes the display curve a UI should use (below 1.0 biases
/// the travel toward the low end, as a frequency dial wants); it does not
/// affect stored values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContinuousRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub step: Option<f32>,
    pub skew: Option<f32>,
}

impl ContinuousRange {
    pub fn new(range: std::ops::RangeInclusive<f32>, default: f32) -> Self {
        let min = *range.start();
        let max = *range.end();
        assert!(min <= max, "parameter min must be <= max");
        assert!(default >= min && default <= max, "default outside range");
        Self {
            min,
            max,
            default,
            step: None,
            skew: None,
        }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_skew(mut self, skew: f32) -> Self {
        self.skew = Some(skew);
        self
    }

    /// Hosts may send out-of-range automation; values are pulled back into
    /// range rather than rejected.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub id: ParameterId,
    pub name: String,
    pub range: ContinuousRange,
    pub unit: Option<String>,
    pub description: Option<String>,
}

impl ParameterDefinition {
    pub fn new(id: impl Into<ParameterId>, name: impl Into<String>, range: ContinuousRange) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            range,
            unit: None,
            description: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered set of parameter definitions. The order fixes the slot index
/// each parameter occupies in a [`ParameterStore`](crate::ParameterStore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterLayout {
    parameters: Vec<ParameterDefinition>,
}

impl ParameterLayout {
    pub fn new(parameters: Vec<ParameterDefinition>) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|def| def.id.as_str() == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|def| def.id.as_str() == id)
    }
}

#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("unknown parameter `{0}`")]
    Unknown(ParameterId),
}
