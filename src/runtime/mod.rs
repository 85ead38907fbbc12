//! Process runtime preparation for the engine library.
//!
//! The engine reads its input data directory and thread budget from the
//! process environment when it is first loaded, so `RuntimeSettings::apply`
//! must run strictly before the engine library is opened. The same settings
//! also travel inside the serialized job, making the handoff explicit rather
//! than purely ambient.
pub mod mpi;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable naming the engine's input data directory.
pub const INPUT_DATA_PATH_VAR: &str = "PRT_INPUT_DATA_PATH";

/// Environment variable capping the math backend's thread count. One thread
/// per rank avoids oversubscription when many MPI processes share a node.
pub const OMP_THREADS_VAR: &str = "OMP_NUM_THREADS";

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub input_data_path: PathBuf,
    pub omp_threads: u32,
}

impl RuntimeSettings {
    pub fn new(input_data_path: impl Into<PathBuf>, omp_threads: u32) -> Self {
        RuntimeSettings {
            input_data_path: input_data_path.into(),
            omp_threads,
        }
    }

    /// Export the settings to the process environment. Mutates process-wide
    /// state; the process is short-lived and single-purpose, so no rollback.
    pub fn apply(&self) {
        // SAFETY: called from the single main thread during startup, before
        // any other thread exists.
        unsafe {
            std::env::set_var(INPUT_DATA_PATH_VAR, &self.input_data_path);
            std::env::set_var(OMP_THREADS_VAR, self.omp_threads.to_string());
        }
        info!(
            "{}={}",
            INPUT_DATA_PATH_VAR,
            self.input_data_path.display()
        );
        info!("{}={}", OMP_THREADS_VAR, self.omp_threads);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_exports_both_variables() {
        let settings = RuntimeSettings::new("/data/prt", 2);
        settings.apply();
        assert_eq!(
            std::env::var(INPUT_DATA_PATH_VAR).unwrap(),
            "/data/prt"
        );
        assert_eq!(std::env::var(OMP_THREADS_VAR).unwrap(), "2");
    }
}
