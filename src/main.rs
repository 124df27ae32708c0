use clap::Parser;

mod config;
mod core;
mod domain;
mod localize;
mod render;
mod session;
mod widget;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();

    let args = core::app::Args::parse();
    let flags = core::app::Flags::new(&args, config::RulerConfig::load());
    if args.save {
        flags.config.save();
    }
    core::app::run(flags)?;
    Ok(())
}
