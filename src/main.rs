use anyhow::Context;
use netcascade::config::ConfigManager;
use netcascade::runner;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .unwrap_or_else(|| "netcascade.toml".to_string());
    let report_path = args.next();

    let manager = ConfigManager::new();
    manager
        .load_from_file(&config_path)
        .with_context(|| format!("loading run config {config_path}"))?;
    let config = manager.get();

    let report = runner::run_competition(&config)?;
    print!("{}", report.render_text());

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).with_context(|| format!("writing report {path}"))?;
    }

    Ok(())
}
