mod cli;
mod config;
mod gateways;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
