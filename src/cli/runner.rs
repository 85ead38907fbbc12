use tracing_subscriber::EnvFilter;

use prt_retrieve::api::RetrievalParams;
use prt_retrieve::engine::SamplerOptions;
use prt_retrieve::types::RunMode;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if args.log { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.n_live_points == 0 {
        return Err(AppError::ZeroLivePoints.into());
    }

    let run_mode = if args.evaluate_only {
        RunMode::Evaluate
    } else {
        RunMode::Retrieve
    };

    let params = RetrievalParams {
        name: args.name,
        run_mode,
        input_data_dir: args.prt_data,
        output_dir: args.output_dir,
        omp_threads: args.omp_threads,
        use_mpi: args.use_mpi,
        sampler: SamplerOptions {
            n_live_points: args.n_live_points,
            resume: args.resume,
            const_efficiency_mode: false,
        },
    };

    launch(params, args.engine_lib.as_deref())
}

#[cfg(feature = "native-engine")]
fn launch(
    params: RetrievalParams,
    engine_lib: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    use prt_retrieve::api;
    use prt_retrieve::engine::native::NativeEngine;

    let library = NativeEngine::resolve_library_path(engine_lib);
    let output_dir = api::run_retrieval(&params, || NativeEngine::load(&library))?;

    println!("\nDone.");
    println!("Outputs written to: {}", output_dir.display());
    Ok(())
}

#[cfg(not(feature = "native-engine"))]
fn launch(
    _params: RetrievalParams,
    _engine_lib: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    Err(AppError::NoEngineSupport.into())
}
