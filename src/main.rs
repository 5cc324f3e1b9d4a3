use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use artillery_sim::io::{csv, json};
use artillery_sim::{simulate_traced, simulate_with, Shell, SimConfig, SimulationResult};

#[derive(Parser)]
#[command(name = "artillery-sim")]
#[command(version)]
#[command(about = "Fire an M795 155 mm shell and report range and hang time", long_about = None)]
struct Cli {
    /// Howitzer angle in degrees, 0 = straight up (asks interactively when omitted)
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Integration time step (s)
    #[arg(long, default_value = "0.5")]
    dt: f64,

    /// Give up if the shell is still airborne after this long (s)
    #[arg(long, default_value = "600.0")]
    max_time: f64,

    /// Print every integration step to stderr
    #[arg(long)]
    debug: bool,

    /// Write the step trace to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a flight summary to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn needs_trace(&self) -> bool {
        self.debug || self.csv.is_some() || self.json.is_some()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let shell = Shell::m795();
    let config = SimConfig::default().with_dt(cli.dt).with_max_time(cli.max_time);
    config.validate()?;

    match cli.angle {
        Some(angle) => {
            let result = fire(&cli, &shell, &config, angle)?;
            report(&result);
        }
        None => interactive(&cli, &shell, &config)?,
    }

    Ok(())
}

/// Ask for angles until the user declines another shot or stdin closes.
fn interactive(cli: &Cli, shell: &Shell, config: &SimConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(answer) = prompt(&mut input, "What is the angle of the howitzer where 0 is up? ")? else {
            break;
        };
        let angle: f64 = match answer.parse() {
            Ok(a) => a,
            Err(_) => {
                eprintln!("'{}' is not an angle in degrees", answer);
                continue;
            }
        };

        match fire(cli, shell, config, angle) {
            Ok(result) => report(&result),
            Err(e) => eprintln!("error: {}", e),
        }

        let again = prompt(&mut input, "\nWould you like to test again? (y/n) ")?;
        println!("\n");
        if !matches!(again.as_deref(), Some("y" | "Y")) {
            break;
        }
    }

    Ok(())
}

fn prompt<R: BufRead>(input: &mut R, question: &str) -> io::Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn fire(
    cli: &Cli,
    shell: &Shell,
    config: &SimConfig,
    angle: f64,
) -> Result<SimulationResult, Box<dyn Error>> {
    if !cli.needs_trace() {
        return Ok(simulate_with(shell, config, angle)?);
    }

    let flight = simulate_traced(shell, config, angle)?;

    if cli.debug {
        for s in &flight.trace {
            let f = &s.forces;
            eprintln!();
            eprintln!("t = {:.2} s", s.time);
            eprintln!("x, y:          {:.3}, {:.3}", s.pos.x, s.pos.y);
            eprintln!("vx, vy:        {:.3}, {:.3}", s.vel.x, s.vel.y);
            eprintln!("Angle:         {:.3} deg", f.heading.to_degrees());
            eprintln!("Mach:          {:.4}", f.mach);
            eprintln!("Drag c:        {:.4}", f.cd);
            eprintln!("Density:       {:.7}", f.density);
            eprintln!("Velocity:      {:.3}", f.speed);
            eprintln!("Surface area:  {:.6}", shell.reference_area());
            eprintln!("Drag force:    {:.3}", f.drag);
        }
        for e in &flight.events {
            eprintln!(
                "{:?} at t={:.1}s  x={:.0}m  alt={:.0}m",
                e.kind, e.time, e.state.pos.x, e.state.pos.y
            );
        }
    }

    if let Some(path) = &cli.csv {
        csv::write_trace_file(path, &flight.trace)?;
        eprintln!("Exported trace: {}", path.display());
    }
    if let Some(path) = &cli.json {
        let summary = json::FlightSummary::from_flight(angle, &flight);
        json::write_summary_file(path, shell, &summary)?;
        eprintln!("Exported summary: {}", path.display());
    }

    Ok(flight.result)
}

fn report(result: &SimulationResult) {
    println!(
        "Distance:     {:.2}m       Hang Time:     {:.2}s",
        result.range, result.hang_time
    );
}
