//! CLI application for controlling Nanoleaf panels.
//!
//! This example demonstrates the REST commands and the UDP streaming channel
//! from a small command-line interface.
//!
//! Run with: cargo run --example nanoleaf_cli -- --help

use std::time::Duration;

use clap::{Parser, Subcommand};
use nanoleaf_rs::{Adjustment, ClientConfig, Color, Frame, Nanoleaf, StreamEffect};

#[derive(Parser)]
#[command(name = "nanoleaf-cli")]
#[command(about = "Control Nanoleaf panels from the command line", long_about = None)]
struct Cli {
    /// Host name or IP address of the controller
    #[arg(long)]
    host: String,

    /// REST API port
    #[arg(long, default_value_t = ClientConfig::DEFAULT_PORT)]
    port: u16,

    /// Auth token (not required for pair)
    #[arg(short, long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a new token (hold the power button for 5-7 seconds first)
    Pair,

    /// Revoke the current token
    Unpair,

    /// Show controller information
    Info,

    /// Turn the panels on
    On,

    /// Turn the panels off
    Off,

    /// Set brightness (0-100)
    Brightness {
        #[arg(value_parser = clap::value_parser!(i32).range(0..=100))]
        level: i32,
        /// Fade duration in seconds
        #[arg(short, long)]
        duration: Option<u32>,
    },

    /// Set color temperature in Kelvin (1200-6500)
    Temperature {
        #[arg(value_parser = clap::value_parser!(i32).range(1200..=6500))]
        kelvin: i32,
    },

    /// List stored effects
    Effects,

    /// Select a stored effect
    Select { name: String },

    /// Flash the panels
    Identify,

    /// Stream a solid color to every panel over UDP
    Stream {
        /// Color as r,g,b
        color: Color,
        /// Transition time in device ticks (100ms each)
        #[arg(short = 'x', long, default_value_t = 5)]
        transition: u8,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.host)
        .port(cli.port)
        .request_timeout(Duration::from_secs(5));
    let mut nanoleaf = Nanoleaf::from_config(&config)?;

    if let Commands::Pair = cli.command {
        let token = nanoleaf.authenticate().await?;
        println!("Paired. Token: {}", token);
        return Ok(());
    }

    let token = cli
        .token
        .ok_or("a token is required for this command. Use --token <TOKEN>")?;
    nanoleaf.set_token(&token);

    match cli.command {
        Commands::Pair => unreachable!(),

        Commands::Unpair => {
            nanoleaf.unauthenticate().await?;
            println!("Token revoked");
        }

        Commands::Info => {
            let info = nanoleaf.controller_info().await?;
            println!("{} ({})", info.name, info.model);
            println!("  Serial: {}", info.serial);
            println!("  Firmware: {}", info.firmware_version);
            println!("  Power: {}", if info.state.on.value { "ON" } else { "OFF" });
            println!("  Brightness: {}%", info.state.brightness.value);
            println!("  Color mode: {}", info.state.color_mode);
            if let Some(effect) = info.effects.selected {
                println!("  Effect: {}", effect);
            }
            println!("  Panels: {}", info.panel_layout.layout.num_panels);
        }

        Commands::On => {
            nanoleaf.state().set_on(true).await?;
            println!("Panels turned ON");
        }

        Commands::Off => {
            nanoleaf.state().set_on(false).await?;
            println!("Panels turned OFF");
        }

        Commands::Brightness { level, duration } => {
            nanoleaf.state().set_brightness(level, duration).await?;
            println!("Brightness set to {}%", level);
        }

        Commands::Temperature { kelvin } => {
            nanoleaf
                .state()
                .set_color_temperature(Adjustment::Value(kelvin))
                .await?;
            println!("Temperature set to {}K", kelvin);
        }

        Commands::Effects => {
            let selected = nanoleaf.effects().selected().await.ok();
            for name in nanoleaf.effects().list().await? {
                let marker = if selected.as_deref() == Some(name.as_str()) { "*" } else { " " };
                println!("{} {}", marker, name);
            }
        }

        Commands::Select { name } => {
            nanoleaf.effects().select(&name).await?;
            println!("Effect '{}' selected", name);
        }

        Commands::Identify => {
            nanoleaf.identify().flash().await?;
            println!("Flashing");
        }

        Commands::Stream { color, transition } => {
            let ids = nanoleaf.layout().layout().await?.stream_panel_ids();
            let effect = StreamEffect::solid(ids, Frame::from_color(&color, transition));

            let mut stream = nanoleaf.stream();
            let endpoint = stream.activate("v1").await?;
            println!("Streaming to {}", endpoint.connect_addr());

            stream.connect().await?;
            stream.write_effect(&effect).await?;
            stream.disconnect()?;
            println!("Sent {} panel(s)", effect.panels.len());
        }
    }

    Ok(())
}
