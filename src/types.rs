//! Shared types and enums used across the launcher.
//! Includes `RunMode`, `LineOpacityMode`, and `ModelFunction`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether the engine samples the posterior or only re-evaluates an
/// existing run (plots, best-fit spectra).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Retrieve,
    Evaluate,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Retrieve => write!(f, "retrieve"),
            RunMode::Evaluate => write!(f, "evaluate"),
        }
    }
}

/// Line opacity treatment requested from the engine for a dataset
/// (only correlated-k tables are used by this setup).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum LineOpacityMode {
    /// Correlated-k tables.
    #[serde(rename = "c-k")]
    CorrelatedK,
}

impl std::fmt::Display for LineOpacityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineOpacityMode::CorrelatedK => write!(f, "c-k"),
        }
    }
}

/// Named reference to a forward model implemented by the engine library.
/// The launcher never evaluates these; it only binds a dataset to one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFunction {
    IsothermalTransmission,
}

impl std::fmt::Display for ModelFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFunction::IsothermalTransmission => write!(f, "isothermal_transmission"),
        }
    }
}
