//! Dynamic binding to the native retrieval engine library.
//!
//! The engine ships as a shared library with a small C surface: an ABI
//! version query and a blocking run entrypoint taking the JSON-serialized
//! job. Loading happens lazily, after `RuntimeSettings::apply`, because the
//! library caches its input data path at load time.
use std::env;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use tracing::debug;

use super::{RetrievalEngine, RetrievalJob};
use crate::error::{Error, Result};

/// ABI revision this launcher speaks.
pub const ENGINE_ABI_VERSION: u32 = 1;

/// Environment variable overriding the engine library location.
pub const ENGINE_LIBRARY_VAR: &str = "PRT_ENGINE_LIBRARY";

const DEFAULT_LIBRARY: &str = if cfg!(target_os = "macos") {
    "libprt_retrieval.dylib"
} else {
    "libprt_retrieval.so"
};

type AbiVersionFn = unsafe extern "C" fn() -> u32;
type RunFn = unsafe extern "C" fn(job_json: *const u8, job_json_len: usize) -> i32;

#[derive(Debug)]
pub struct NativeEngine {
    library: Library,
}

impl NativeEngine {
    /// Decide which library file to open: explicit CLI path, then the
    /// `PRT_ENGINE_LIBRARY` variable, then the platform default name left to
    /// the system loader's search path.
    pub fn resolve_library_path(cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Ok(path) = env::var(ENGINE_LIBRARY_VAR) {
            return PathBuf::from(path);
        }
        PathBuf::from(DEFAULT_LIBRARY)
    }

    /// Open the engine library and verify its ABI revision.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading engine library {}", path.display());
        // SAFETY: the engine library's initializers are required to be safe
        // to run from any rank; we hold the Library for the process lifetime.
        let library = unsafe { Library::new(path) }
            .map_err(|e| Error::EngineLoad(format!("{}: {e}", path.display())))?;

        let found = unsafe {
            let abi_version: Symbol<AbiVersionFn> = library
                .get(b"prt_retrieval_abi_version")
                .map_err(|e| Error::EngineLoad(e.to_string()))?;
            abi_version()
        };
        if found != ENGINE_ABI_VERSION {
            return Err(Error::EngineAbi {
                found,
                expected: ENGINE_ABI_VERSION,
            });
        }

        Ok(NativeEngine { library })
    }
}

impl RetrievalEngine for NativeEngine {
    fn run(&mut self, job: &RetrievalJob) -> Result<()> {
        let payload = serde_json::to_vec(job)?;
        let code = unsafe {
            let run: Symbol<RunFn> = self
                .library
                .get(b"prt_retrieval_run")
                .map_err(|e| Error::EngineLoad(e.to_string()))?;
            run(payload.as_ptr(), payload.len())
        };
        if code != 0 {
            return Err(Error::Engine(format!(
                "engine run returned status {code}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_resolution_prefers_cli_override() {
        let cli = PathBuf::from("/opt/engines/libcustom.so");
        assert_eq!(
            NativeEngine::resolve_library_path(Some(&cli)),
            cli
        );
    }

    #[test]
    fn library_resolution_falls_back_to_default_name() {
        unsafe { std::env::remove_var(ENGINE_LIBRARY_VAR) };
        let resolved = NativeEngine::resolve_library_path(None);
        assert_eq!(resolved, PathBuf::from(DEFAULT_LIBRARY));
    }

    #[test]
    fn loading_a_missing_library_is_an_engine_load_error() {
        let err = NativeEngine::load(Path::new("/nonexistent/libprt_retrieval.so")).unwrap_err();
        assert!(matches!(err, Error::EngineLoad(_)));
    }
}
