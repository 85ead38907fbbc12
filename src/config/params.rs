//! Retrieval parameters and their prior transforms.
//!
//! Free parameters carry a `Prior` mapping a unit-interval sample to physical
//! units; fixed parameters carry a value. The order in which parameters are
//! added to a configuration defines the sampler's dimension ordering.
use serde::{Deserialize, Serialize};

/// Prior transform from the sampler's unit cube to physical units.
///
/// Transforms are pure and exact at both endpoints: `map_unit(0.0)` returns
/// the lower bound and `map_unit(1.0)` the upper bound.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prior {
    /// Uniform prior on `[low, high]`: `x -> low + (high - low) * x`.
    Uniform { low: f64, high: f64 },
}

impl Prior {
    /// Map a unit-cube coordinate to physical units.
    pub fn map_unit(&self, x: f64) -> f64 {
        match *self {
            Prior::Uniform { low, high } => low + (high - low) * x,
        }
    }

    /// The physical bounds of the prior support.
    pub fn bounds(&self) -> (f64, f64) {
        (self.map_unit(0.0), self.map_unit(1.0))
    }
}

impl std::fmt::Display for Prior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prior::Uniform { low, high } => write!(f, "Uniform[{low}, {high}]"),
        }
    }
}

/// A single entry of the retrieval's parameter vector.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Whether the sampler varies this parameter.
    pub free: bool,
    /// Fixed physical value; `None` for free parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Prior transform; `None` for fixed parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior: Option<Prior>,
}

impl Parameter {
    /// A parameter held at a fixed value for the whole run.
    pub fn fixed(name: impl Into<String>, value: f64) -> Self {
        Parameter {
            name: name.into(),
            free: false,
            value: Some(value),
            prior: None,
        }
    }

    /// A free parameter sampled under the given prior.
    pub fn free(name: impl Into<String>, prior: Prior) -> Self {
        Parameter {
            name: name.into(),
            free: true,
            value: None,
            prior: Some(prior),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_prior_is_exact_at_endpoints() {
        let p = Prior::Uniform {
            low: 300.0,
            high: 2300.0,
        };
        assert_eq!(p.map_unit(0.0), 300.0);
        assert_eq!(p.map_unit(1.0), 2300.0);
        assert_eq!(p.map_unit(0.5), 1300.0);
    }

    #[test]
    fn fixed_and_free_constructors() {
        let fixed = Parameter::fixed("stellar_radius", 1.0);
        assert!(!fixed.free);
        assert_eq!(fixed.value, Some(1.0));
        assert!(fixed.prior.is_none());

        let free = Parameter::free("log_g", Prior::Uniform { low: 2.0, high: 5.5 });
        assert!(free.free);
        assert!(free.value.is_none());
        assert_eq!(free.prior.unwrap().bounds(), (2.0, 5.5));
    }
}
