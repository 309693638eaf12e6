use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use groupconf::{load_config, Config};

#[derive(Parser)]
#[command(name = "groupconf")]
#[command(about = "Read grouped-settings config files", long_about = None)]
struct Cli {
    /// Path to the config file
    path: PathBuf,

    /// Override directive, applied in order after the file parse
    #[arg(short = 's', long = "set", value_name = "GROUP.KEY=VALUE")]
    set: Vec<String>,

    /// Print a single value instead of the whole config
    #[arg(short, long, value_name = "GROUP.KEY")]
    get: Option<String>,

    /// Emit the parsed config as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let overrides: Vec<&str> = cli.set.iter().map(String::as_str).collect();
    let config = load_config(&cli.path, &overrides)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    if let Some(target) = &cli.get {
        print_value(&config, target);
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_config(&config);
    }

    Ok(())
}

fn print_value(config: &Config, target: &str) {
    let value = target
        .split_once('.')
        .and_then(|(group, key)| config.get(group.trim(), key.trim()));
    match value {
        Some(value) => println!("{value}"),
        // Absent lookups are not an error; print the neutral marker.
        None => println!("<absent>"),
    }
}

fn print_config(config: &Config) {
    for (name, group) in config.iter() {
        println!("[{name}]");
        for (key, value) in group.iter() {
            println!("{key} = {value}");
        }
        println!();
    }
}
