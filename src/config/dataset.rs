//! Dataset registration binding an observed spectrum file to a forward model.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{LineOpacityMode, ModelFunction};

/// One observed dataset the engine fits. The file path is expected to have
/// been validated (see `setup::validate_input_file`) before registration;
/// this type itself performs no I/O.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DataEntry {
    /// Short tag used in engine output files, e.g. `HST`.
    pub name: String,
    /// Path to the spectrum text file (wavelength, depth, error columns).
    pub path: PathBuf,
    /// Forward model the engine resolves and evaluates for this dataset.
    pub model: ModelFunction,
    pub line_opacity_mode: LineOpacityMode,
    /// Spectral resolution of the observation.
    pub data_resolution: u32,
    /// Resolution the model spectrum is computed at before convolution.
    pub model_resolution: u32,
}
