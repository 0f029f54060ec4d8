use std::path::PathBuf;

use crate::{
    common::{error::AppError, money::Money},
    domain::ledger::SeedAccount,
};

/// Command line configuration: `teller <script.csv> [seeds.csv]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub script_path: PathBuf,
    /// When absent the reference accounts from [`default_seeds`] are loaded.
    pub seeds_path: Option<PathBuf>,
}

impl Config {
    /// Parses positional arguments; the first item is the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
        if args.len() < 2 {
            return Err(AppError::MissingArg);
        }

        Ok(Self {
            script_path: PathBuf::from(&args[1]),
            seeds_path: args.get(2).map(PathBuf::from),
        })
    }
}

/// The two reference accounts the teller starts with.
pub fn default_seeds() -> Vec<SeedAccount> {
    vec![
        SeedAccount::new("Mary Dawn", "123-444-888", Money::from_units(1000)),
        SeedAccount::new("Alf David", "2301-8880", Money::from_units(2500)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_script_path() {
        assert!(matches!(
            Config::from_args(["teller"]),
            Err(AppError::MissingArg)
        ));
    }

    #[test]
    fn seeds_path_is_optional() {
        let cfg = Config::from_args(["teller", "script.csv"]).unwrap();
        assert_eq!(cfg.script_path, PathBuf::from("script.csv"));
        assert_eq!(cfg.seeds_path, None);

        let cfg = Config::from_args(["teller", "script.csv", "seeds.csv"]).unwrap();
        assert_eq!(cfg.seeds_path, Some(PathBuf::from("seeds.csv")));
    }

    #[test]
    fn default_seeds_are_the_reference_accounts() {
        let seeds = default_seeds();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].name, "Mary Dawn");
        assert_eq!(seeds[1].balance, Money::from_units(2500));
    }
}
