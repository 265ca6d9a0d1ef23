use crate::common::error::KeyRankError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Utility to deserialize a JSON configuration file into an options struct.
pub trait Config
where
    Self: DeserializeOwned,
{
    /// Loads a configuration object from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file to load.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KeyRankError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
