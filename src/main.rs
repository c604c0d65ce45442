//! Warebot entry point
//!
//! Batch mode runs the scene's whole instruction stream and prints the
//! final robot position and GPS score. Interactive mode drives the robot
//! from stdin instead: `w a s d` step, `q` quits, and the floor is printed
//! after every step.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use warebot::{Direction, Scene, Settings, parse_scene};

/// Warehouse robot crate-pushing simulator
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scene file: map rows, a blank line, then instruction rows
    input: PathBuf,

    /// Widen the map before simulating
    #[arg(long)]
    wide: bool,

    /// Fail on instruction symbols outside `^ v < >`
    #[arg(long)]
    strict: bool,

    /// Drive the robot from stdin (w/a/s/d, q to quit) instead of running
    /// the scene's instruction stream
    #[arg(long)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read scene from {}", cli.input.display()))?;
    let settings = Settings {
        strict_instructions: cli.strict,
        expand: cli.wide,
    };
    let scene = parse_scene(&text, &settings)
        .with_context(|| format!("malformed scene in {}", cli.input.display()))?;

    if cli.interactive {
        interactive(scene)
    } else {
        batch(scene);
        Ok(())
    }
}

fn batch(mut scene: Scene) {
    let last = scene.warehouse.run(&scene.instructions);
    log::info!("executed {} instructions", scene.instructions.len());
    println!("Final position: {last}");
    println!("GPS score: {}", scene.warehouse.gps_score());
}

fn interactive(mut scene: Scene) -> Result<()> {
    let warehouse = &mut scene.warehouse;
    println!("{}", warehouse.snapshot());
    println!("Position: {}", warehouse.robot());

    let mut stdin = io::stdin().lock();
    let mut step = 0u32;
    loop {
        print!("Move robot (w/a/s/d, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let dir = match line.trim() {
            "q" => break,
            "w" => Direction::Up,
            "s" => Direction::Down,
            "a" => Direction::Left,
            "d" => Direction::Right,
            _ => {
                println!("Invalid key");
                continue;
            }
        };

        step += 1;
        println!("Step {step}: {}", dir.symbol());
        let out = warehouse.step(dir);
        if !out.moved {
            println!("ROBOT IS STUCK AT {}", out.position);
        }
        println!("{}", warehouse.snapshot());
    }

    println!("Final position: {}", warehouse.robot());
    println!("{}", warehouse.snapshot());
    Ok(())
}
