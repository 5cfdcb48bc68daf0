use clap::Parser;
use macroquad::prelude::Conf;
use projectile_sim::cli::LaunchArgs;
use projectile_sim::logging;

mod app;
mod constants;
mod controls;
mod render;

#[derive(Parser)]
#[command(name = "trajectory_viewer", version)]
#[command(about = "Animate a projectile flight frame by frame")]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match cli.launch.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    app::run(config).await;
}
