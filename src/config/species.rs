//! Opacity species lists handed through to the engine.
//!
//! The launcher does not open any opacity files; it only names the sources
//! the engine should load from its input data directory.
use serde::{Deserialize, Serialize};

/// Line absorbers sampled with free abundances between `abundance_bounds`
/// (log10 mass fractions), or taken from chemical equilibrium when
/// `equilibrium` is set.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineSpecies {
    pub names: Vec<String>,
    pub equilibrium: bool,
    pub abundance_bounds: (f64, f64),
}

/// Complete opacity source configuration for one retrieval.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Rayleigh scatterers, e.g. `H2`, `He`.
    pub rayleigh: Vec<String>,
    /// Collision-induced absorption pairs, e.g. `H2--H2`.
    pub continuum: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineSpecies>,
}

impl SpeciesConfig {
    pub fn set_rayleigh(&mut self, names: &[&str]) {
        self.rayleigh = names.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_continuum(&mut self, names: &[&str]) {
        self.continuum = names.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_line(&mut self, names: &[&str], equilibrium: bool, abundance_bounds: (f64, f64)) {
        self.line = Some(LineSpecies {
            names: names.iter().map(|s| s.to_string()).collect(),
            equilibrium,
            abundance_bounds,
        });
    }
}
