//! MPI launch diagnostics.
//!
//! The launcher issues no MPI calls itself; rank coordination belongs to the
//! engine. This module only answers "did a launcher start us, and as which
//! rank?" so users can verify that `mpirun` spawned all workers. Detection
//! is a capability check over the environment variables the common launchers
//! export, so it never fails and never blocks startup.
use std::env;

use tracing::info;

/// Result of probing for an MPI launcher.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MpiContext {
    Available { rank: u32, size: u32 },
    Unavailable,
}

/// (rank variable, size variable) pairs exported by Open MPI, MPICH/Hydra,
/// and Slurm respectively.
const LAUNCHER_VARS: [(&str, &str); 3] = [
    ("OMPI_COMM_WORLD_RANK", "OMPI_COMM_WORLD_SIZE"),
    ("PMI_RANK", "PMI_SIZE"),
    ("SLURM_PROCID", "SLURM_NTASKS"),
];

impl MpiContext {
    /// Probe the environment for a known launcher. Malformed values are
    /// treated the same as absent ones.
    pub fn detect() -> Self {
        for (rank_var, size_var) in LAUNCHER_VARS {
            let rank = env::var(rank_var).ok().and_then(|v| v.parse().ok());
            let size = env::var(size_var).ok().and_then(|v| v.parse().ok());
            if let (Some(rank), Some(size)) = (rank, size) {
                return MpiContext::Available { rank, size };
            }
        }
        MpiContext::Unavailable
    }

    /// Log one diagnostic line describing the launch context.
    pub fn banner(&self) {
        let host = env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string());
        match self {
            MpiContext::Available { rank, size } => {
                info!("[mpi] rank {}/{} on {}", rank, size, host);
            }
            MpiContext::Unavailable => {
                info!("[mpi] no launcher detected; no rank banner (host={})", host);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so both states are exercised
    // in a single test to avoid racing a parallel test runner.
    #[test]
    fn detect_reads_launcher_variables_and_tolerates_absence() {
        unsafe {
            env::remove_var("OMPI_COMM_WORLD_RANK");
            env::remove_var("OMPI_COMM_WORLD_SIZE");
            env::remove_var("PMI_RANK");
            env::remove_var("PMI_SIZE");
            env::remove_var("SLURM_PROCID");
            env::remove_var("SLURM_NTASKS");
        }
        assert_eq!(MpiContext::detect(), MpiContext::Unavailable);
        MpiContext::Unavailable.banner(); // must not panic

        unsafe {
            env::set_var("OMPI_COMM_WORLD_RANK", "3");
            env::set_var("OMPI_COMM_WORLD_SIZE", "8");
        }
        assert_eq!(
            MpiContext::detect(),
            MpiContext::Available { rank: 3, size: 8 }
        );

        // Malformed rank falls through to "unavailable".
        unsafe {
            env::set_var("OMPI_COMM_WORLD_RANK", "not-a-rank");
        }
        assert_eq!(MpiContext::detect(), MpiContext::Unavailable);

        unsafe {
            env::remove_var("OMPI_COMM_WORLD_RANK");
            env::remove_var("OMPI_COMM_WORLD_SIZE");
        }
    }
}
