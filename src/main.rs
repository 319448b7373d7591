use anyhow::Context;
use clap::Parser;
use regcheck::config::{AgeArgs, Command, RosterArgs};
use regcheck::domain::ports::RosterSettings;
use regcheck::utils::error::{ErrorSeverity, RegError};
use regcheck::utils::{logger, validation};
use regcheck::utils::validation::Validate;
use regcheck::{age_group, email, phone};
use regcheck::{AgeGroupFormat, CliConfig, LocalStorage, RosterConfig, RosterEngine, RosterPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let ok = match config.command {
        Command::Phone { raw } => check_phone(&raw),
        Command::Email { raw } => check_email(&raw),
        Command::Age(args) => check_age(&args)?,
        Command::ParseGroup { label } => parse_group(&label),
        Command::Roster(args) => return run_roster(args).await,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn check_phone(raw: &str) -> bool {
    let result = phone::detailed_validate(raw);
    if result.is_valid {
        println!("✅ valid phone number");
        println!("normalized: {}", phone::normalize(raw));
        println!("formatted:  {}", phone::format(raw));
    } else {
        println!("❌ {}", result.error_message);
    }
    result.is_valid
}

fn check_email(raw: &str) -> bool {
    let result = email::detailed_validate(raw);
    if result.is_valid {
        println!("✅ valid email address");
    } else {
        println!("❌ {}", result.error_message);
    }
    result.is_valid
}

fn check_age(args: &AgeArgs) -> anyhow::Result<bool> {
    let format = if args.alternate {
        AgeGroupFormat::Alternate
    } else {
        AgeGroupFormat::Standard
    };

    let age = match (&args.dob, args.age) {
        (Some(dob), _) => {
            let dob = validation::validate_date("--dob", dob)?;
            age_group::calculate_age(dob)
        }
        (None, Some(age)) => age,
        (None, None) => anyhow::bail!("either --dob or --age is required"),
    };
    println!("age: {}", age);

    if let Some(label) = &args.group {
        let check = age_group::validate_age_for_age_group(age, label, format);
        match check.message {
            Some(message) => println!("❌ {}", message),
            None => println!("✅ age {} fits {}", age, label),
        }
        return Ok(check.is_valid);
    }

    match age_group::get_age_group(age, format) {
        Some(group) => {
            println!("age group ({}): {} [{}-{}]", format, group.label, group.min, group.max);
            let all = age_group::get_valid_age_groups(age, format);
            if all.len() > 1 {
                let labels: Vec<&str> = all.iter().map(|g| g.label.as_str()).collect();
                println!("also matches: {}", labels.join(", "));
            }
            Ok(true)
        }
        None => {
            println!("❌ no {} age group covers age {}", format, age);
            Ok(false)
        }
    }
}

fn parse_group(label: &str) -> bool {
    match age_group::parse_age_group(label) {
        Some(range) => {
            println!("{}: min {} max {}", label, range.min, range.max);
            true
        }
        None => {
            println!("❌ unrecognized age group label: {}", label);
            false
        }
    }
}

async fn run_roster(args: RosterArgs) -> anyhow::Result<()> {
    tracing::info!("📁 Loading roster configuration from: {}", args.config);

    let mut config = RosterConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if let Some(input) = args.input {
        tracing::info!("🔧 Input overridden to: {}", input);
        config.roster.input_path = Some(input);
    }
    if let Some(output) = args.output {
        tracing::info!("🔧 Output overridden to: {}", output);
        config.output.output_path = output;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - roster not read");
        return Ok(());
    }

    let storage = LocalStorage::new(String::new());
    let pipeline = RosterPipeline::new(storage, config);
    let engine = RosterEngine::new(pipeline);

    match engine.run().await {
        Ok(run) => {
            println!(
                "✅ {} rows checked: {} valid, {} invalid",
                run.summary.total, run.summary.valid, run.summary.invalid
            );
            println!("📁 Report saved to: {}", run.output);
            if run.summary.invalid > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn display_config_summary(config: &RosterConfig) {
    println!("📋 Roster: {}", config.roster_name());
    println!("   input:        {}", config.input_path());
    println!("   output:       {}", config.output_path());
    println!("   age groups:   {}", config.age_group_format());
    println!("   reference:    {}", config.reference_date());
    println!("   formats:      {}", config.output_formats().join(", "));
    if let Some(archive) = config.compression_filename() {
        println!("   archive:      {}", archive);
    }
}

fn exit_with(e: RegError) -> ! {
    tracing::error!(
        "❌ Roster check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
