use clap::Parser;
use dashfit::config::cli::Align;
use dashfit::utils::{logger, validation::Validate};
use dashfit::{CliConfig, Command, DisplayConfig, MemoryDomainCache, NumberFormat};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("dashfit failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}

fn run(config: CliConfig) -> dashfit::Result<ExitCode> {
    let display = match &config.config {
        Some(path) => DisplayConfig::from_file(path)?,
        None => DisplayConfig::default(),
    };
    display.validate()?;

    let format = match &config.decimal_separator {
        Some(separator) => NumberFormat::new(separator.clone())?,
        None => display.number_format()?,
    };

    match config.command {
        Command::Domain { hosts } => {
            let cache = MemoryDomainCache::new();
            for host in &hosts {
                println!("{}", dashfit::domain_from_host(host, &cache));
            }
        }
        Command::ShortHost { host } => println!("{}", dashfit::short_host_from_host(&host)),
        Command::Currency { amount, width } => {
            let rendered = match width.or(display.currency_width()) {
                Some(width) => dashfit::fit_currency(&amount, width, &format)?,
                None => dashfit::pad_currency(&amount, &format)?,
            };
            println!("[{}]", rendered);
        }
        Command::Fit {
            text,
            width,
            align,
            pad,
            ellipsis,
        } => {
            let ellipsis = ellipsis.as_deref().unwrap_or(display.ellipsis());
            let fitted = match (align, pad) {
                (Align::Left, false) => dashfit::fit_left(&text, width, ellipsis),
                (Align::Right, false) => dashfit::fit_right(&text, width, ellipsis),
                (Align::Left, true) => dashfit::pad_fit_left(&text, width, ellipsis),
                (Align::Right, true) => dashfit::pad_fit_right(&text, width, ellipsis),
            };
            println!("[{}]", fitted);
        }
        Command::Coin { symbol } => println!("{}", dashfit::short_coin_symbol(&symbol)),
        Command::HostPort { input } => {
            let Some((host, port)) = dashfit::parse_host_and_port(&input).into_option() else {
                eprintln!("❌ '{}' is not in host:port form", input);
                return Ok(ExitCode::FAILURE);
            };
            println!("host={} port={}", host, port);
        }
        Command::Version { this, that } => {
            println!("{}", dashfit::version_is_greater(&this, &that)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
