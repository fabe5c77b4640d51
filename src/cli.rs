use anyhow::{anyhow, bail, Result};
use std::env;

/// Flags for the demo harness. Hand-rolled on purpose; three flags do not need
/// a parser dependency.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoArgs {
    pub config: Option<String>,
    pub catalog: Option<String>,
    pub ticks: Option<u32>,
}

impl DemoArgs {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = DemoArgs::default();
        let mut iter = args.into_iter();
        let _ = iter.next(); // skip program name if present
        while let Some(raw_flag) = iter.next() {
            let flag = raw_flag.as_ref();
            if !flag.starts_with("--") {
                bail!("Unexpected argument '{flag}'. Use --config/--catalog/--ticks with values.");
            }
            let key = &flag[2..];
            let value = iter.next().ok_or_else(|| anyhow!("Expected a value after '{flag}'"))?.as_ref().to_string();
            match key {
                "config" => parsed.config = Some(value),
                "catalog" => parsed.catalog = Some(value),
                "ticks" => {
                    parsed.ticks =
                        Some(value.parse::<u32>().map_err(|_| anyhow!("Invalid tick count '{value}'"))?);
                }
                _ => bail!("Unknown flag '{flag}'. Supported flags: --config, --catalog, --ticks."),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = ["demo", "--config", "tuning.json", "--catalog", "clips.json", "--ticks", "240"];
        let parsed = DemoArgs::parse(args).expect("parse");
        assert_eq!(parsed.config.as_deref(), Some("tuning.json"));
        assert_eq!(parsed.catalog.as_deref(), Some("clips.json"));
        assert_eq!(parsed.ticks, Some(240));
    }

    #[test]
    fn rejects_unknown_flags_and_bad_values() {
        assert!(DemoArgs::parse(["demo", "--tick", "1"]).is_err());
        assert!(DemoArgs::parse(["demo", "--ticks", "many"]).is_err());
        assert!(DemoArgs::parse(["demo", "stray"]).is_err());
        assert!(DemoArgs::parse(["demo", "--ticks"]).is_err());
    }

    #[test]
    fn empty_args_are_fine() {
        assert_eq!(DemoArgs::parse(["demo"]).expect("parse"), DemoArgs::default());
    }
}
