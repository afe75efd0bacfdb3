use std::io;
use std::sync::Arc;

use anyhow::Context;

use flora_shell::ShellConfig;
use flora_storefront::Storefront;

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("invalid configuration")?;
    flora_observability::init(config.log_format);

    let catalog = config.load_catalog().context("failed to load catalog")?;
    let mut storefront = Storefront::new(Arc::new(catalog));

    let stdin = io::stdin();
    let stdout = io::stdout();
    flora_shell::run(&mut storefront, stdin.lock(), stdout.lock())?;

    tracing::info!(session_id = %storefront.session_id(), "session ended");
    Ok(())
}
