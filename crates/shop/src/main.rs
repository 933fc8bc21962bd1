use gildedrose_observability::LogFormat;
use gildedrose_shop::ShopConfig;
use gildedrose_shop::config::LOG_FORMAT_VAR;

fn main() -> anyhow::Result<()> {
    // Logging comes up first so configuration warnings are not lost.
    let format = std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|raw| LogFormat::parse(&raw))
        .unwrap_or_default();
    gildedrose_observability::init_with(format);

    let config = ShopConfig::from_env();
    tracing::info!(days = config.days, "starting simulation");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_shop::run(&config, &mut out)?;
    Ok(())
}
