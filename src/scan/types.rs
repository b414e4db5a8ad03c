use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// File dependencies collected from a script: normalized paths, grouped
/// by how the script uses them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    /// Data files read with `open`.
    pub datafiles: BTreeSet<String>,
    /// Files written with `outfile`.
    pub outfiles: BTreeSet<String>,
    /// Figures produced with `gnuplot --output=`.
    pub figfiles: BTreeSet<String>,
}

impl Dependencies {
    pub fn is_empty(&self) -> bool {
        self.datafiles.is_empty() && self.outfiles.is_empty() && self.figfiles.is_empty()
    }
}
