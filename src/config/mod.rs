pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "regcheck")]
#[command(about = "Phone, email and age group checks for student registration")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate, normalize and format a phone number
    Phone { raw: String },

    /// Validate an email address
    Email { raw: String },

    /// Resolve or check an age group
    Age(AgeArgs),

    /// Parse an age group label such as U13, 12-14, "Under 12" or 51+
    ParseGroup { label: String },

    /// Check every row of a roster CSV
    Roster(RosterArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct AgeArgs {
    /// Date of birth, YYYY-MM-DD
    #[arg(long, conflicts_with = "age", required_unless_present = "age")]
    pub dob: Option<String>,

    /// Age in whole years
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,

    /// Age group label to check the age against
    #[arg(long)]
    pub group: Option<String>,

    /// Use the alternate table (Under 12, 12-14, ...)
    #[arg(long)]
    pub alternate: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct RosterArgs {
    /// Path to the roster TOML configuration
    #[arg(short, long, default_value = "roster.toml")]
    pub config: String,

    /// Override roster.input_path
    #[arg(long)]
    pub input: Option<String>,

    /// Override output.output_path
    #[arg(long)]
    pub output: Option<String>,

    /// Load and validate the configuration without reading the roster
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_phone_subcommand() {
        let config = CliConfig::try_parse_from(["regcheck", "phone", "0712345678"]).unwrap();
        assert!(!config.verbose);
        assert!(matches!(config.command, Command::Phone { ref raw } if raw == "0712345678"));
    }

    #[test]
    fn test_parse_age_requires_dob_or_age() {
        assert!(CliConfig::try_parse_from(["regcheck", "age"]).is_err());
        assert!(CliConfig::try_parse_from(["regcheck", "age", "--age", "12", "--dob", "2014-01-01"]).is_err());

        let config =
            CliConfig::try_parse_from(["regcheck", "--verbose", "age", "--age", "12", "--group", "U13", "--alternate"])
                .unwrap();
        assert!(config.verbose);
        match config.command {
            Command::Age(args) => {
                assert_eq!(args.age, Some(12));
                assert_eq!(args.group.as_deref(), Some("U13"));
                assert!(args.alternate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_roster_defaults() {
        let config = CliConfig::try_parse_from(["regcheck", "roster", "--dry-run"]).unwrap();
        match config.command {
            Command::Roster(args) => {
                assert_eq!(args.config, "roster.toml");
                assert!(args.dry_run);
                assert_eq!(args.input, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
