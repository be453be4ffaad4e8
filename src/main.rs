mod config;
mod err;
mod http;
mod opt;
mod redir;
mod routes;
mod server;
mod signal;
mod tcp;

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options {
        log_verbosity,
        settings,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(match log_verbosity {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match run(settings).await {
        Ok(()) => {
            log::info!("exited");
            Ok(())
        }
        Err(e) => {
            log::error!("exited with error: {}", e);
            Err(e.into())
        }
    }
}

async fn run(settings: opt::Settings) -> Result<(), err::Error> {
    let config = config::Config::resolve(settings)?;
    server::run(config).await
}
