use std::{
    env, process, thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use ds_cache::{DirSizeCache, Usage};

use crate::{
    config::Config,
    output::{
        progress::with_spinner,
        report::{make_stats_line, print_report},
    },
};

mod cli;
mod config;
mod output;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match Config::parse(env::args_os()) {
        Ok(config) => config,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(err) if !err.use_stderr() => err.exit(),
            Ok(err) => {
                let _ = err.print();
                process::exit(1);
            }
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
    };

    let cache = DirSizeCache::new();

    let (usage, took) = measure(&cache, &config)?;
    print_report("first call", &config.dir, &usage, &config.byte_unit_system, took);

    if !config.sleep.is_zero() {
        log::info!("sleeping {:?} before measuring again", config.sleep);
        thread::sleep(config.sleep);
    }

    let (usage, took) = measure(&cache, &config)?;
    print_report("second call", &config.dir, &usage, &config.byte_unit_system, took);

    println!("{}", make_stats_line(&cache.stats()?));

    Ok(())
}

fn measure(cache: &DirSizeCache, config: &Config) -> anyhow::Result<(Usage, Duration)> {
    let start = Instant::now();
    let usage = with_spinner(format!("Measuring '{}'...", config.dir.display()), || {
        cache.get_usage_detailed(&config.dir)
    })?
    .with_context(|| format!("failed to measure '{}'", config.dir.display()))?;
    Ok((usage, start.elapsed()))
}
