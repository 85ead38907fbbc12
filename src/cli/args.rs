use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "prt-retrieve",
    version,
    about = "Nested-sampling atmosphere retrieval launcher with optional MPI"
)]
pub struct CliArgs {
    /// Directory containing opacity data and hst_example_clear_spec.txt
    #[arg(long, default_value = "/home/jkrick/fornax-demo-notebooks/pRT/prt_data")]
    pub prt_data: PathBuf,

    /// Directory to write retrieval outputs
    #[arg(long, default_value = "./retrievals/runs")]
    pub output_dir: PathBuf,

    /// Retrieval name; prefixes all engine output files
    #[arg(long, default_value = "hst_example_clear_spec")]
    pub name: String,

    /// Let the engine coordinate ranks through MPI
    #[arg(long, default_value_t = false)]
    pub use_mpi: bool,

    /// Number of live points for the sampler. Increase to see scaling.
    #[arg(long, default_value_t = 40)]
    pub n_live_points: u32,

    /// Resume an existing run if present (default: start fresh)
    #[arg(long, default_value_t = false)]
    pub resume: bool,

    /// Run in evaluate mode (plots only) instead of retrieve mode
    #[arg(long, default_value_t = false)]
    pub evaluate_only: bool,

    /// Thread count for the engine's math backend. Keep 1 under MPI.
    #[arg(long, default_value_t = 1)]
    pub omp_threads: u32,

    /// Path to the engine shared library (overrides PRT_ENGINE_LIBRARY)
    #[arg(long)]
    pub engine_lib: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
