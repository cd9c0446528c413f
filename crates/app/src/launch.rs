//! Command-line options for the desktop window: `--seed`, `--name`, `--policy`.

use arena_core::{AiPolicy, SeedChoice, validate_name};

pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub name: String,
    /// `None` keeps the configured policy.
    pub policy: Option<AiPolicy>,
}

pub fn resolve_launch_options(
    args: &[String],
    generated_seed: u64,
) -> Result<LaunchOptions, String> {
    let mut seed = None;
    let mut name = None;
    let mut policy = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if !matches!(flag, "--seed" | "--name" | "--policy") {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                let value = args.get(index).map(String::as_str);
                value.ok_or_else(|| format!("missing value for {flag}"))?
            }
        };
        match flag {
            "--seed" => set_once(&mut seed, flag, parse_seed_value(value)?)?,
            "--name" => {
                let valid = validate_name(value).map_err(|e| format!("invalid name: {e}"))?;
                set_once(&mut name, flag, valid)?;
            }
            _ => set_once(&mut policy, flag, parse_policy(value)?)?,
        }
        index += 1;
    }

    Ok(LaunchOptions {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        name: name.unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        policy,
    })
}

fn set_once<T>(slot: &mut Option<T>, flag: &str, value: T) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("{flag} provided more than once"));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn parse_policy(raw_value: &str) -> Result<AiPolicy, String> {
    match raw_value {
        "threshold" => Ok(AiPolicy::Threshold),
        "flat-weighted" => Ok(AiPolicy::FlatWeighted),
        other => Err(format!("unknown policy '{other}' (threshold or flat-weighted)")),
    }
}
