//! High-level, ergonomic entry points for launching a retrieval.
//!
//! The CLI is a thin wrapper over this module; embedders can call
//! [`run_retrieval`] directly with any [`RetrievalEngine`] implementation,
//! which is also how the test suite drives the full pipeline without a
//! native engine library.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::RetrievalConfig;
use crate::config::dataset::DataEntry;
use crate::config::params::Prior;
use crate::constants::{R_JUP_MEAN, R_SUN};
use crate::engine::{EngineSettings, Retrieval, RetrievalEngine, SamplerOptions};
use crate::error::Result;
use crate::runtime::{RuntimeSettings, mpi::MpiContext};
use crate::setup::{ensure_output_dir, validate_input_file};
use crate::types::{LineOpacityMode, ModelFunction, RunMode};

/// Resolved options for one retrieval run, independent of how they were
/// obtained (CLI flags or embedding code).
#[derive(Clone, PartialEq, Debug)]
pub struct RetrievalParams {
    /// Run name; prefixes the engine's output files.
    pub name: String,
    pub run_mode: RunMode,
    /// Directory holding opacity data and the observed spectrum file.
    pub input_data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub omp_threads: u32,
    pub use_mpi: bool,
    pub sampler: SamplerOptions,
}

/// Build the transmission-spectrum retrieval configuration for the HST
/// example target.
///
/// Parameter order is load-bearing: it defines the sampler's dimension
/// ordering, so entries must not be reordered between runs that share
/// checkpoint files.
pub fn basic_transmission_config(
    name: &str,
    run_mode: RunMode,
    data_file: &Path,
) -> RetrievalConfig {
    let mut config = RetrievalConfig::new(name, run_mode);

    // Fixed stellar radius for this target.
    config.add_fixed_parameter("stellar_radius", 0.651 * R_SUN);

    config.add_free_parameter("log_g", Prior::Uniform { low: 2.0, high: 5.5 });
    config.add_free_parameter(
        "planet_radius",
        Prior::Uniform {
            low: 0.2 * R_JUP_MEAN,
            high: 0.4 * R_JUP_MEAN,
        },
    );
    config.add_free_parameter(
        "temperature",
        Prior::Uniform {
            low: 300.0,
            high: 2300.0,
        },
    );
    config.add_free_parameter("log_Pcloud", Prior::Uniform { low: -6.0, high: 2.0 });

    config.set_rayleigh_species(&["H2", "He"]);
    config.set_continuum_opacities(&["H2--H2", "H2--He"]);
    config.set_line_species(
        &["H2O__POKAZATEL", "CH4__HITEMP", "CO-NatAbund__HITEMP"],
        false,
        (-6.0, 0.0),
    );

    config.add_data(DataEntry {
        name: "HST".to_string(),
        path: data_file.to_path_buf(),
        model: ModelFunction::IsothermalTransmission,
        line_opacity_mode: LineOpacityMode::CorrelatedK,
        data_resolution: 60,
        model_resolution: 120,
    });

    config
}

/// Run the full launch pipeline: runtime preparation, MPI banner, input
/// validation, output preparation, engine load, configuration assembly, and
/// the blocking engine run. Returns the output directory on success.
///
/// The engine is produced by `engine_factory` only after the runtime
/// settings are in the environment (a native engine caches its input data
/// path when it is loaded) and after the input file has been validated, so
/// a missing input never costs a library load.
pub fn run_retrieval<E, F>(params: &RetrievalParams, engine_factory: F) -> Result<PathBuf>
where
    E: RetrievalEngine,
    F: FnOnce() -> Result<E>,
{
    let runtime = RuntimeSettings::new(&params.input_data_dir, params.omp_threads);
    runtime.apply();

    MpiContext::detect().banner();

    // The validation gate comes before any engine work: a missing input
    // file must not cost a library load.
    let data_file = validate_input_file(&params.input_data_dir)?;
    let output_dir = ensure_output_dir(&params.output_dir)?;

    let engine = engine_factory()?;

    let config = basic_transmission_config(&params.name, params.run_mode, &data_file);
    info!(
        "configured retrieval '{}': mode={}, data={}",
        config.retrieval_name,
        config.run_mode,
        data_file.display()
    );

    let settings = EngineSettings {
        use_mpi: params.use_mpi,
        ..EngineSettings::default()
    };
    let mut retrieval = Retrieval::new(config, output_dir.clone(), runtime, settings, engine);
    retrieval.run(params.sampler.clone())?;

    Ok(output_dir)
}
