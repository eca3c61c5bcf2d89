use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::Config;
use ds_cache::bytes::ByteUnitSystem;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to measure
    pub dir: PathBuf,
    /// Seconds to wait between the two measurements
    #[arg(default_value_t = 0)]
    pub sleep_seconds: u64,

    #[arg(name = "si", long = "si", conflicts_with = "binary")]
    pub si: bool,
    #[arg(name = "binary", long = "binary", alias = "bin", conflicts_with = "si")]
    pub binary: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let byte_unit_system = if self.binary {
            ByteUnitSystem::Binary
        } else if self.si {
            ByteUnitSystem::SI
        } else {
            ByteUnitSystem::Raw
        };

        Ok(Config {
            dir: self.dir,
            sleep: Duration::from_secs(self.sleep_seconds),
            byte_unit_system,
        })
    }
}
