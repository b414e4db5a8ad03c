//! Lexical scanner that extracts file dependencies from Gretl scripts
//! without executing them: data files opened with `open`, output files
//! from `outfile`, and figures written via `gnuplot --output=`.

pub mod scan;

pub use scan::{Dependencies, GretlScanner};
