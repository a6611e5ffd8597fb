//! ledplay CLI - Stream a text animation to the LED device or the terminal.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use signal_hook::consts::signal::{SIGINT, SIGTERM};

use ledplay::{
    config::{DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, PlaybackConfig},
    frame::FrameStore,
    player::Player,
    sink::{DeviceSink, LED_DEVICE, PreviewSink},
};

#[derive(Parser)]
#[command(name = "ledplay")]
#[command(version)]
#[command(about = "Play text-art animations on an LED matrix or in the terminal")]
struct Cli {
    /// Animation file to load
    #[arg(short, long)]
    input: PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Playback rate in frames per second
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Preview in the terminal instead of writing to the device
    #[arg(short, long)]
    demo: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlaybackConfig {
        width: cli.width,
        height: cli.height,
        fps: cli.fps,
        input: cli.input,
        demo: cli.demo,
    };
    config.validate().unwrap_or_else(|e| {
        eprintln!("ledplay: {}", e);
        process::exit(1);
    });

    let store = FrameStore::load(&config.input, config.width, config.height).unwrap_or_else(|e| {
        eprintln!("ledplay: {}: {}", config.input.display(), e);
        process::exit(1);
    });

    let demo = config.demo;
    let player = Player::new(config);

    // SIGINT/SIGTERM set the stop token; the loop winds down after the
    // current frame and the sink is released on drop.
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, player.stop_handle()).unwrap_or_else(|e| {
            eprintln!("ledplay: failed to install signal handler: {}", e);
            process::exit(1);
        });
    }

    let result = if demo {
        player.run(&store, &mut PreviewSink::stdout())
    } else {
        let mut sink = DeviceSink::open(LED_DEVICE).unwrap_or_else(|e| {
            eprintln!("ledplay: failed to open {}: {}", LED_DEVICE, e);
            process::exit(1);
        });
        player.run(&store, &mut sink)
    };

    match result {
        Ok(frames) => info!("playback stopped after {} frames", frames),
        Err(e) => {
            eprintln!("ledplay: {}", e);
            process::exit(1);
        }
    }
}
