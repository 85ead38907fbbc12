#![doc = r#"
prt-retrieve — a launcher for nested-sampling exoplanet atmosphere retrievals.

This crate configures and starts a single retrieval run against a fixed
transmission-spectrum forward model, optionally under MPI. The sampling
engine and the forward model are external collaborators reached through the
[`engine::RetrievalEngine`] trait; the crate's job is environment
preparation, input validation, and ordered assembly of the retrieval
configuration. It powers the `prt-retrieve` CLI and can be embedded in your
own Rust applications.

Quick start: launch programmatically
------------------------------------
```rust,no_run
use std::path::PathBuf;
use prt_retrieve::{
    api::{run_retrieval, RetrievalParams},
    engine::{SamplerOptions, native::NativeEngine},
    RunMode,
};

fn main() -> prt_retrieve::Result<()> {
    let params = RetrievalParams {
        name: "hst_example_clear_spec".to_string(),
        run_mode: RunMode::Retrieve,
        input_data_dir: PathBuf::from("/data/prt_data"),
        output_dir: PathBuf::from("./retrievals/runs"),
        omp_threads: 1,
        use_mpi: false,
        sampler: SamplerOptions {
            n_live_points: 40,
            resume: false,
            const_efficiency_mode: false,
        },
    };

    let library = NativeEngine::resolve_library_path(None);
    let output_dir = run_retrieval(&params, || NativeEngine::load(&library))?;
    println!("outputs in {}", output_dir.display());
    Ok(())
}
```

Custom engines
--------------
Any type implementing [`engine::RetrievalEngine`] can be handed to
[`api::run_retrieval`]; the launch pipeline (runtime preparation, MPI
banner, validation, configuration assembly) is identical regardless of the
backend. This is how the test suite exercises the pipeline end to end
without a native sampler installed.

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. a missing input file or an engine ABI mismatch.

Feature flags
-------------
- `native-engine` (default): dynamic loading of the engine shared library.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`config`] — retrieval configuration: parameters, priors, species, data.
- [`engine`] — the engine seam and the native backend.
- [`runtime`] — environment preparation and MPI launch diagnostics.
- [`setup`] — input validation and output directory preparation.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod setup;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{LineOpacityMode, ModelFunction, RunMode};

// Configuration
pub use config::RetrievalConfig;
pub use config::params::{Parameter, Prior};

// Engine seam
pub use engine::{EngineSettings, Retrieval, RetrievalEngine, RetrievalJob, SamplerOptions};

// High-level API re-exports
pub use api::{RetrievalParams, basic_transmission_config, run_retrieval};
