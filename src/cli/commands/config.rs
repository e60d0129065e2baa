use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::mail::MailPlan;
use crate::ui::messages::{detail, info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            info("Current configuration:");
            println!("{}", cfg.to_masked_yaml()?);
        }

        if *check {
            cfg.validate()?;
            let plan = MailPlan::from_config(&cfg.mail)?;

            success("Configuration is valid");
            detail(format!("sender     : {}", plan.from));
            detail(format!("recipients : {}", plan.recipient_count()));
            detail(format!("database   : {}", cfg.database));
            detail(format!("output dir : {}", cfg.output_path().display()));
        }

        if !*print_config && !*check {
            info(format!("Config file: {}", Config::config_file().display()));
        }
    }

    Ok(())
}
