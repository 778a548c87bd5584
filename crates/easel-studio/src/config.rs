use std::path::PathBuf;

use anyhow::{Result, bail};
use easel_engine::persist::{LoadPolicy, SAVE_FILE_NAME};

/// Studio settings: defaults, overridden from the command line.
///
/// ```text
/// easel-studio [--strict] [--log <filter>] [save-file]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Where `S` writes and `L` reads.
    pub save_path: PathBuf,
    pub load_policy: LoadPolicy,
    pub log_filter: Option<String>,
    pub title: String,
    /// Logical pixels.
    pub width: f64,
    pub height: f64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(SAVE_FILE_NAME),
            load_policy: LoadPolicy::Lenient,
            log_filter: None,
            title: "easel".to_string(),
            width: 400.0,
            height: 400.0,
        }
    }
}

impl StudioConfig {
    /// Builds a config from arguments, program name already stripped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut path_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strict" => config.load_policy = LoadPolicy::Strict,
                "--log" => match args.next() {
                    Some(filter) => config.log_filter = Some(filter),
                    None => bail!("--log needs a filter, e.g. --log debug"),
                },
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if path_seen {
                        bail!("unexpected extra argument {path:?}");
                    }
                    config.save_path = PathBuf::from(path);
                    path_seen = true;
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig> {
        StudioConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_gives_defaults() {
        let c = parse(&[]).unwrap();
        assert_eq!(c, StudioConfig::default());
        assert_eq!(c.save_path, PathBuf::from("beautiful_painting.json"));
    }

    #[test]
    fn positional_sets_save_path() {
        let c = parse(&["art/lake.json"]).unwrap();
        assert_eq!(c.save_path, PathBuf::from("art/lake.json"));
        assert_eq!(c.load_policy, LoadPolicy::Lenient);
    }

    #[test]
    fn flags() {
        let c = parse(&["--strict", "--log", "easel_engine=debug", "x.json"]).unwrap();
        assert_eq!(c.load_policy, LoadPolicy::Strict);
        assert_eq!(c.log_filter.as_deref(), Some("easel_engine=debug"));
        assert_eq!(c.save_path, PathBuf::from("x.json"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--nope"]).is_err());
        assert!(parse(&["--log"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
