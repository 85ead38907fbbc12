//! In-memory retrieval configuration assembled by the launcher and consumed
//! by the engine.
//!
//! A `RetrievalConfig` collects the parameter vector, opacity species lists,
//! and dataset registrations in a fixed order. Parameter insertion order
//! defines the sampler's search-space dimension ordering, so builders must
//! add parameters deterministically.
pub mod dataset;
pub mod params;
pub mod species;

use serde::{Deserialize, Serialize};

use crate::types::RunMode;
use dataset::DataEntry;
use params::{Parameter, Prior};
use species::SpeciesConfig;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RetrievalConfig {
    pub retrieval_name: String,
    pub run_mode: RunMode,
    /// Adaptive mesh refinement of the pressure grid.
    pub amr: bool,
    pub scattering_in_emission: bool,
    /// Ordered parameter vector; order is the sampler dimension order.
    pub parameters: Vec<Parameter>,
    pub species: SpeciesConfig,
    pub data: Vec<DataEntry>,
}

impl RetrievalConfig {
    pub fn new(retrieval_name: impl Into<String>, run_mode: RunMode) -> Self {
        RetrievalConfig {
            retrieval_name: retrieval_name.into(),
            run_mode,
            amr: false,
            scattering_in_emission: false,
            parameters: Vec::new(),
            species: SpeciesConfig::default(),
            data: Vec::new(),
        }
    }

    /// Append a fixed-value parameter.
    pub fn add_fixed_parameter(&mut self, name: &str, value: f64) -> &mut Self {
        self.parameters.push(Parameter::fixed(name, value));
        self
    }

    /// Append a free parameter with its prior transform.
    pub fn add_free_parameter(&mut self, name: &str, prior: Prior) -> &mut Self {
        self.parameters.push(Parameter::free(name, prior));
        self
    }

    pub fn set_rayleigh_species(&mut self, names: &[&str]) -> &mut Self {
        self.species.set_rayleigh(names);
        self
    }

    pub fn set_continuum_opacities(&mut self, names: &[&str]) -> &mut Self {
        self.species.set_continuum(names);
        self
    }

    pub fn set_line_species(
        &mut self,
        names: &[&str],
        equilibrium: bool,
        abundance_bounds: (f64, f64),
    ) -> &mut Self {
        self.species.set_line(names, equilibrium, abundance_bounds);
        self
    }

    /// Register an observed dataset.
    pub fn add_data(&mut self, entry: DataEntry) -> &mut Self {
        self.data.push(entry);
        self
    }

    /// Number of free parameters, i.e. the sampler's dimensionality.
    pub fn n_free_parameters(&self) -> usize {
        self.parameters.iter().filter(|p| p.free).count()
    }

    /// Names of the free parameters in sampler dimension order.
    pub fn free_parameter_names(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|p| p.free)
            .map(|p| p.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_order_is_insertion_order() {
        let mut config = RetrievalConfig::new("test", RunMode::Retrieve);
        config
            .add_fixed_parameter("stellar_radius", 1.0)
            .add_free_parameter("log_g", Prior::Uniform { low: 2.0, high: 5.5 })
            .add_free_parameter("temperature", Prior::Uniform { low: 300.0, high: 2300.0 });

        assert_eq!(config.n_free_parameters(), 2);
        assert_eq!(config.free_parameter_names(), vec!["log_g", "temperature"]);
        assert_eq!(config.parameters[0].name, "stellar_radius");
        assert!(!config.parameters[0].free);
    }

    #[test]
    fn new_config_defaults() {
        let config = RetrievalConfig::new("run", RunMode::Evaluate);
        assert!(!config.amr);
        assert!(!config.scattering_in_emission);
        assert!(config.parameters.is_empty());
        assert!(config.data.is_empty());
    }
}
