//! ledcalc entry point: the serial console calculator.
//!
//! The same engine that drives the LED panel firmware runs here against
//! stdin and stdout, so the calculator can be exercised without any
//! hardware attached.

mod calculator;
mod config;
mod display;
mod input;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::calculator::Calculator;
use crate::config::Config;
use crate::display::panel::{self, Panel, Rgb};
use crate::display::segments;
use crate::input::InputEvent;

/// A four-function calculator for seven-segment LED panels, driven one key
/// at a time from the console.
#[derive(Parser, Debug)]
#[command(name = "ledcalc", version, about)]
struct Args {
    /// Configuration file (defaults to <config-dir>/ledcalc/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured number of display digits.
    #[arg(long)]
    width: Option<usize>,

    /// Draw the LED panel as ASCII art after every key.
    #[arg(long)]
    panel: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(width) = args.width {
        anyhow::ensure!(width > 0, "--width must be at least 1");
        config.display_width = width;
    }
    if args.panel {
        config.panel = true;
    }

    info!(width = config.display_width, panel = config.panel, "starting ledcalc");

    let mut calc = Calculator::new(config.display_width);
    let led_panel = Panel::new(
        config.display_width,
        Rgb::from(config.color),
        config.brightness,
    );

    if config.panel {
        // The same lamp test the firmware flashes at power-on.
        println!("{}", panel::ascii_art(&segments::all_eights(config.display_width)));
        println!();
        println!("{}", panel::ascii_art(&segments::staircase(config.display_width)));
        println!();
    }
    print_banner(calc.display());

    let events = input::spawn_stdin_reader();
    for event in events.iter() {
        match event {
            InputEvent::Key(c) => {
                let shown = calc.handle_char(c).to_string();
                println!("Key: '{c}' -> Display: \"{shown}\"");
                if config.panel {
                    println!("{}", panel::ascii_art(&segments::layout(&shown, config.display_width)));
                }
                let frame = led_panel.frame(&shown);
                debug!(
                    lit = frame.iter().filter(|p| **p != Rgb::OFF).count(),
                    "frame planned"
                );
            }
            InputEvent::Quit => break,
        }
    }

    info!("ledcalc stopped");
    Ok(())
}

fn print_banner(display: &str) {
    println!("ledcalc - serial console mode");
    println!();
    println!("Keys:");
    println!("  digits 0-9 and . for the decimal point");
    println!("  operators + - * / and = to evaluate");
    println!("  n negate, b backspace, c clear entry, C clear all");
    println!("  q to quit");
    println!();
    println!("Current display: {display}");
}
