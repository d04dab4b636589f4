use std::path::Path;

use anyhow::Result;
use statkit::{points_from_values, DataPoint};

/// Reads a sample file. With `values_only` every line contributes its last
/// field as a y value and x is the line index.
pub fn load_sample<P: AsRef<Path>>(path: P, values_only: bool) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    tracing::info!("Reading sample file {}", path.display());

    let sample = if values_only {
        let values = dataio::read_values_file(path).map_err(|e| anyhow::anyhow!("{}", e))?;
        points_from_values(&values)
    } else {
        dataio::read_pairs_file(path)
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .into_iter()
            .map(DataPoint::from)
            .collect()
    };

    tracing::debug!(n = sample.len(), "loaded sample");
    Ok(sample)
}
