use std::env;

use color_eyre::eyre::{OptionExt, Result, eyre};

pub struct CliArgs {
    pub input_file_path: String,
    pub partitions: Option<u32>,
}

impl CliArgs {
    pub fn load() -> Result<Self> {
        let args: Vec<String> = env::args().collect();

        let input_file_path = args.get(1).ok_or_eyre("Input file not passed")?.to_owned();
        let partitions = args.get(2).map(|s| parse_partitions(s)).transpose()?;

        Ok(CliArgs {
            input_file_path,
            partitions,
        })
    }
}

fn parse_partitions(s: &str) -> Result<u32> {
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(eyre!("Partitions must be a positive number, got '{}'", s)),
    }
}
