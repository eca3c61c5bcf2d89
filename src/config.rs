use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::Parser;

use crate::cli::Args;
use ds_cache::bytes::ByteUnitSystem;

#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub sleep: Duration,
    pub byte_unit_system: ByteUnitSystem,
}

impl Config {
    /// Parses command-line arguments. Argument errors keep their
    /// `clap::Error` so callers can downcast and render them.
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(itr)?;
        args.try_into()
    }
}
