use anyhow::Context;
use clap::Parser;
use map_props::config::toml_config::LogFormat;
use map_props::core::time_ago::parse_timestamp;
use map_props::domain::ports::Clock;
use map_props::utils::{logger, validation::Validate};
use map_props::{
    CliConfig, EnglishRelativeTime, FixedClock, LocalInput, MapPropsError, PropertyDeriver,
    SystemClock, TomlConfig, UrlBuilder,
};
use serde::Serialize;

#[derive(Serialize)]
struct Output {
    properties: map_props::PropertyBundle,
    urls: map_props::UrlBundle,
}

fn main() {
    let cli = CliConfig::parse();

    // 載入配置 (logger 尚未初始化，錯誤直接輸出到 stderr)
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, config) {
        tracing::error!("❌ map-props failed: {:#}", e);
        match e.downcast_ref::<MapPropsError>() {
            Some(err) => eprintln!("❌ {}", err.user_friendly_message()),
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

fn load_config(cli: &CliConfig) -> map_props::Result<TomlConfig> {
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, config: TomlConfig) -> anyhow::Result<()> {
    let input = LocalInput;
    let map = input
        .read_map(&cli.map)
        .with_context(|| format!("reading map record {}", cli.map.display()))?;
    let polygon = cli
        .polygon
        .as_ref()
        .map(|path| {
            input
                .read_polygon(path)
                .with_context(|| format!("reading polygon {}", path.display()))
        })
        .transpose()?;

    let properties = match &cli.now {
        Some(now) => {
            let clock = FixedClock(parse_timestamp(now)?);
            tracing::info!("🕒 Using fixed clock: {}", clock.now().to_rfc3339());
            PropertyDeriver::new(clock, EnglishRelativeTime).derive(&map, polygon.as_ref())?
        }
        None => PropertyDeriver::new(SystemClock, EnglishRelativeTime).derive(&map, polygon.as_ref())?,
    };
    let urls = UrlBuilder::new(config).build_urls(&map);

    let output = Output { properties, urls };
    let json = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", json);

    tracing::debug!("✅ Derived properties for map {}", map.id);
    Ok(())
}
