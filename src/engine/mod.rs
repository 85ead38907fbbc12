//! Retrieval engine seam.
//!
//! The nested-sampling engine is an external collaborator: the launcher
//! assembles a `RetrievalJob` and hands it across the `RetrievalEngine`
//! trait. The production implementation (`native`, behind the
//! `native-engine` feature) forwards the serialized job to the engine
//! shared library; tests substitute a mock.
#[cfg(feature = "native-engine")]
pub mod native;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::runtime::RuntimeSettings;

/// Engine construction flags, fixed for the lifetime of one `Retrieval`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Let the engine coordinate ranks through MPI.
    pub use_mpi: bool,
    /// Draw sample spectra during evaluation (expensive; off for this setup).
    pub evaluate_sample_spectra: bool,
    /// Apply the engine's bundled plot style to generated figures.
    pub use_prt_plot_style: bool,
    /// Select the UltraNest backend instead of MultiNest. Off for this
    /// setup; the engine defaults to MultiNest when false.
    pub ultranest: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            use_mpi: false,
            evaluate_sample_spectra: false,
            use_prt_plot_style: true,
            ultranest: false,
        }
    }
}

/// Sampler tuning passed to the engine's run call.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SamplerOptions {
    pub n_live_points: u32,
    pub resume: bool,
    /// MultiNest constant-efficiency mode; disabled for this setup.
    pub const_efficiency_mode: bool,
}

/// Everything the engine needs for one sampling campaign. Serialized as
/// JSON for the native handoff; the embedded `RuntimeSettings` duplicate
/// the environment variables so the contract is explicit.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RetrievalJob {
    pub config: RetrievalConfig,
    pub output_directory: PathBuf,
    pub runtime: RuntimeSettings,
    pub settings: EngineSettings,
    pub sampler: SamplerOptions,
}

/// The external engine boundary. `run` blocks until the whole sampling
/// campaign completes or fails; checkpointing and resume logic live entirely
/// on the engine side of this trait.
pub trait RetrievalEngine {
    fn run(&mut self, job: &RetrievalJob) -> Result<()>;
}

/// A configured retrieval bound to an engine instance.
pub struct Retrieval<E: RetrievalEngine> {
    config: RetrievalConfig,
    output_directory: PathBuf,
    runtime: RuntimeSettings,
    settings: EngineSettings,
    engine: E,
}

impl<E: RetrievalEngine> Retrieval<E> {
    pub fn new(
        config: RetrievalConfig,
        output_directory: PathBuf,
        runtime: RuntimeSettings,
        settings: EngineSettings,
        engine: E,
    ) -> Self {
        Retrieval {
            config,
            output_directory,
            runtime,
            settings,
            engine,
        }
    }

    /// Execute the sampling campaign. Blocking; when run under MPI every
    /// rank enters this call and the engine coordinates writers internally.
    pub fn run(&mut self, sampler: SamplerOptions) -> Result<()> {
        let job = RetrievalJob {
            config: self.config.clone(),
            output_directory: self.output_directory.clone(),
            runtime: self.runtime.clone(),
            settings: self.settings.clone(),
            sampler,
        };

        // A copy of the effective configuration lands next to the engine
        // outputs, so a finished run documents what produced it.
        let dump = self
            .output_directory
            .join(format!("{}_config.json", job.config.retrieval_name));
        std::fs::write(&dump, serde_json::to_string_pretty(&job)?)?;

        info!(
            "starting retrieval '{}' ({} free parameters, {} live points)",
            job.config.retrieval_name,
            job.config.n_free_parameters(),
            job.sampler.n_live_points
        );
        self.engine.run(&job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::params::Prior;
    use crate::error::Error;
    use crate::types::RunMode;
    use tempfile::TempDir;

    struct RecordingEngine {
        ran: bool,
        fail: bool,
    }

    impl RetrievalEngine for RecordingEngine {
        fn run(&mut self, job: &RetrievalJob) -> Result<()> {
            self.ran = true;
            assert_eq!(job.sampler.n_live_points, 40);
            if self.fail {
                return Err(Error::Engine("sampler diverged".into()));
            }
            Ok(())
        }
    }

    fn test_config() -> RetrievalConfig {
        let mut config = RetrievalConfig::new("unit", RunMode::Retrieve);
        config.add_free_parameter("temperature", Prior::Uniform { low: 300.0, high: 2300.0 });
        config
    }

    fn test_options() -> SamplerOptions {
        SamplerOptions {
            n_live_points: 40,
            resume: false,
            const_efficiency_mode: false,
        }
    }

    #[test]
    fn run_builds_job_and_dumps_config() {
        let out = TempDir::new().unwrap();
        let mut retrieval = Retrieval::new(
            test_config(),
            out.path().to_path_buf(),
            RuntimeSettings::new("/data", 1),
            EngineSettings::default(),
            RecordingEngine { ran: false, fail: false },
        );

        retrieval.run(test_options()).unwrap();
        assert!(retrieval.engine.ran);

        let dump = out.path().join("unit_config.json");
        let text = std::fs::read_to_string(dump).unwrap();
        // The backend selector must reach the engine through the dump.
        assert!(text.contains("\"ultranest\""));
        let job: RetrievalJob = serde_json::from_str(&text).unwrap();
        assert_eq!(job.config.retrieval_name, "unit");
        assert_eq!(job.runtime.omp_threads, 1);
        assert!(!job.settings.ultranest);
    }

    #[test]
    fn engine_failure_propagates() {
        let out = TempDir::new().unwrap();
        let mut retrieval = Retrieval::new(
            test_config(),
            out.path().to_path_buf(),
            RuntimeSettings::new("/data", 1),
            EngineSettings::default(),
            RecordingEngine { ran: false, fail: true },
        );

        let err = retrieval.run(test_options()).unwrap_err();
        assert!(matches!(err, Error::Engine(_)));
    }
}
