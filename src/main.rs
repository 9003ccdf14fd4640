mod cfg;
mod cli;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
