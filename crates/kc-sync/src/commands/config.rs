//! Configuration management commands.

use std::io::{BufRead, Write};

use crate::cli::ConfigCommand;
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            let shown = if key == "client_secret" { "****" } else { value.as_str() };
            success(&format!("Set {key} = {shown}"));
            Ok(())
        }
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    for line in describe(config) {
        println!("{line}");
    }
    Ok(())
}

/// Configuration as `key: value` lines, secret masked.
fn describe(config: &CliConfig) -> Vec<String> {
    let mut lines = vec![format!("server_url: {}", config.server_url)];
    if let Some(realm) = &config.default_realm {
        lines.push(format!("default_realm: {realm}"));
    }
    lines.push(format!("output_format: {:?}", config.output_format));
    lines.push(format!("timeout_secs: {}", config.timeout_secs));
    lines.push(format!("context_path: {:?}", config.context_path));
    if let Some(auth) = &config.auth {
        lines.push(format!("client_id: {}", auth.client_id));
        if auth.client_secret.is_some() {
            lines.push("client_secret: ****".to_string());
        }
    }
    lines
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    info("Initializing kc-sync configuration...");
    println!();

    let server_url = prompt(&mut input, "Server URL", &config.server_url)?;
    config.set("server_url", &server_url)?;

    let current_realm = config.default_realm.clone().unwrap_or_else(|| "none".to_string());
    let realm = prompt(&mut input, "Default realm", &current_realm)?;
    config.set("default_realm", &realm)?;

    let context_path = prompt(&mut input, "Context path", &config.context_path)?;
    config.set("context_path", &context_path)?;

    let current_client = config
        .auth
        .as_ref()
        .map(|auth| auth.client_id.clone())
        .unwrap_or_default();
    let client_id = prompt(&mut input, "Client ID", &current_client)?;
    if !client_id.is_empty() {
        config.set("client_id", &client_id)?;
    }

    let format = format!("{:?}", config.output_format).to_lowercase();
    let output = prompt(&mut input, "Output format (table/json/quiet)", &format)?;
    config.set("output_format", &output)?;

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    info("Provide the client secret through KEYCLOAK_CLIENT_SECRET or `config set client_secret`");
    Ok(())
}

/// Prompts for one value; an empty answer keeps `current`.
fn prompt(input: &mut impl BufRead, label: &str, current: &str) -> crate::CliResult<String> {
    print!("{label} [{current}]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        current.to_string()
    } else {
        trimmed.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_masks_secret() {
        let mut config = CliConfig::default();
        config.set("client_id", "kc-sync").unwrap();
        config.set("client_secret", "s3cr3t").unwrap();

        let lines = describe(&config);
        assert!(lines.contains(&"client_id: kc-sync".to_string()));
        assert!(lines.contains(&"client_secret: ****".to_string()));
        assert!(lines.iter().all(|line| !line.contains("s3cr3t")));
    }

    #[test]
    fn prompt_keeps_current_on_empty_answer() {
        let mut answers = "\nhttps://sso.test\n".as_bytes();

        assert_eq!(prompt(&mut answers, "Server URL", "http://localhost:8080").unwrap(), "http://localhost:8080");
        assert_eq!(prompt(&mut answers, "Server URL", "http://localhost:8080").unwrap(), "https://sso.test");
    }
}
