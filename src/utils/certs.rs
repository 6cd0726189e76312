/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client certificate discovery
//!
//! Certificate login needs a certificate/key pair. Both are expected to live
//! in a single directory as `<name>.crt` and `<name>.key` PEM files.

use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Finds the `.crt` and `.key` files in `dir`
///
/// # Arguments
/// * `dir` - Directory holding the client certificate and its private key
///
/// # Returns
/// * `Ok(vec![crt, key])` - Paths in the order the transport expects them
/// * `Err(AppError::Config)` - If the directory cannot be read or a file is missing
pub fn resolve_cert_paths(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, AppError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| {
        error!("Cannot read certificate directory {}: {}", dir.display(), e);
        AppError::Config(format!("certificate directory {}: {e}", dir.display()))
    })?;

    let mut cert = None;
    let mut key = None;
    for entry in entries.flatten() {
        let path = entry.path();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("crt") if cert.is_none() => cert = Some(path),
            Some("key") if key.is_none() => key = Some(path),
            _ => {}
        }
    }

    match (cert, key) {
        (Some(cert), Some(key)) => {
            debug!("Using certificate {} and key {}", cert.display(), key.display());
            Ok(vec![cert, key])
        }
        _ => Err(AppError::Config(format!(
            "no .crt/.key pair found in {}",
            dir.display()
        ))),
    }
}
