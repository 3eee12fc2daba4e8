//! Run configuration
//!
//! One run is fully described by three paths: the input data file, the side
//! file holding the percentile parameter, and the output file. Anything
//! wrong here is fatal before a single record is processed.

use std::path::PathBuf;

use types::errors::ConfigError;

use crate::percentile::Percentile;

/// Paths for one analytics run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Pipe-delimited contribution records
    pub input: PathBuf,
    /// Side file holding the percentile parameter
    pub percentile_file: PathBuf,
    /// Destination for report lines
    pub output: PathBuf,
}

impl RunConfig {
    /// Build a config from positional arguments (program name excluded)
    ///
    /// Expects input, percentile file, and output paths in that order.
    /// Surplus arguments are ignored.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let input = args.next().ok_or(ConfigError::Usage)?;
        let percentile_file = args.next().ok_or(ConfigError::Usage)?;
        let output = args.next().ok_or(ConfigError::Usage)?;

        Ok(Self {
            input: input.into(),
            percentile_file: percentile_file.into(),
            output: output.into(),
        })
    }

    /// Read and validate the percentile parameter
    pub fn load_percentile(&self) -> Result<Percentile, ConfigError> {
        Percentile::from_file(&self.percentile_file)
    }
}
