//! Reading distance matrices from disk.

use std::path::Path;

use ndarray::Array2;
use ndarray_npy::read_npy;

/// Element types accepted in a `.npy` distance matrix.
pub enum NpyType {
    /// Read as is.
    F64,
    /// Promoted to `f64`.
    F32,
}

impl NpyType {
    /// All accepted types, in the order they are tried.
    const fn variants() -> &'static [Self] {
        &[Self::F64, Self::F32]
    }

    /// Reads the matrix as this type and promotes it to `f64`.
    fn read_with_type<P: AsRef<Path>>(&self, path: P) -> Result<Array2<f64>, String> {
        match self {
            Self::F64 => read_npy::<_, Array2<f64>>(path).map_err(|e| e.to_string()),
            Self::F32 => read_npy::<_, Array2<f32>>(path)
                .map(|a| a.mapv(f64::from))
                .map_err(|e| e.to_string()),
        }
    }
}

/// Reads a 2-D distance matrix from a `.npy` file.
pub fn read_distmat<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, String> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some("npy") => (),
        Some(ext) => return Err(format!("Unknown data format {ext} for path: {}", path.as_ref().display())),
        None => {
            return Err(format!(
                "Could not determine data format without extension for path: {}",
                path.as_ref().display()
            ))
        }
    }

    let mut errors = Vec::new();
    for ty in NpyType::variants() {
        match ty.read_with_type(&path) {
            Ok(distmat) => return Ok(distmat),
            Err(e) => errors.push(e),
        }
    }
    Err(format!(
        "Failed to read NPY file at path: {} ({})",
        path.as_ref().display(),
        errors.join("; ")
    ))
}
