use clap::Parser;
use env_logger::{Builder, Env, Target};
use sing_geosite::{CliArgs, Generator};

fn main() {
    let args = CliArgs::parse();

    Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .target(Target::Stderr)
        .init();

    let generator = Generator::new(args.to_config());
    if let Err(e) = generator.run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
