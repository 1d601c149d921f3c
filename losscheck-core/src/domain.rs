// losscheck_core/src/domain.rs
use std::fmt;
use std::path::PathBuf;

/// Byte count of a file, or `None` when it is absent.
pub type SizeResult = Option<u64>;

/// The three files associated with one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPaths {
    pub original: PathBuf,
    pub codestream: PathBuf,
    pub reconstructed: PathBuf,
}

/// Compression ratio `original / compressed`.
///
/// `Ratio::UNDEFINED` (0.0) stands for "not computable". A real ratio is
/// always strictly positive, so the sentinel can never be confused with one.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    pub const UNDEFINED: Ratio = Ratio(0.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_defined(self) -> bool {
        self.0 > 0.0
    }

    pub(crate) fn from_quotient(q: f64) -> Self {
        if q.is_finite() && q > 0.0 {
            Ratio(q)
        } else {
            Ratio::UNDEFINED
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::UNDEFINED
    }
}

/// Result of comparing an original against its reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Identical,
    Different,
    MissingOriginal { path: PathBuf },
    MissingReconstructed { path: PathBuf },
    ComparisonError { detail: String },
}

impl VerificationOutcome {
    pub fn is_identical(&self) -> bool {
        matches!(self, VerificationOutcome::Identical)
    }

    pub fn is_different(&self) -> bool {
        matches!(self, VerificationOutcome::Different)
    }

    /// Missing file on either side, or a fault while comparing.
    pub fn is_missing_or_error(&self) -> bool {
        matches!(
            self,
            VerificationOutcome::MissingOriginal { .. }
                | VerificationOutcome::MissingReconstructed { .. }
                | VerificationOutcome::ComparisonError { .. }
        )
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationOutcome::Identical => f.write_str("Identical (Lossless)"),
            VerificationOutcome::Different => f.write_str("DIFFERENT"),
            VerificationOutcome::MissingOriginal { path }
            | VerificationOutcome::MissingReconstructed { path } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                write!(f, "Missing ({name})")
            }
            VerificationOutcome::ComparisonError { .. } => f.write_str("Comparison Error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemResult {
    pub name: String,
    pub original_size: SizeResult,
    pub compressed_size: SizeResult,
    pub ratio: Ratio,
    pub outcome: VerificationOutcome,
}

impl ItemResult {
    pub fn sizes_present(&self) -> bool {
        self.original_size.is_some() && self.compressed_size.is_some()
    }
}
