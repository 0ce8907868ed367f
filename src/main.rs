mod app;
mod config;
mod fetch;
mod model;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("SIEM Atlas v{} starting", env!("CARGO_PKG_VERSION"));

    app::run()
}
