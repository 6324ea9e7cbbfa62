use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use kudoku::{parse_grid, Solver};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kudoku", version, about = "Backtracking Sudoku solver")]
struct Cli {
    /// Puzzle file: nine lines of nine whitespace-separated digits, 0 for blanks.
    input: PathBuf,

    /// Highlight status lines with colors
    #[arg(long)]
    color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let mut grid = parse_grid(&text).context("parse puzzle")?;

    println!("Initial grid:\n{grid}");

    let mut solver = Solver::new();
    if solver.solve(&mut grid) {
        if cli.color {
            println!("{}\n{grid}", "Solved grid:".green().bold());
        } else {
            println!("Solved grid:\n{grid}");
        }
    } else if cli.color {
        println!("{}", "No solution exists".red().bold());
    } else {
        println!("No solution exists");
    }
    Ok(())
}
