//! Interactive driver for combining matrix text files
//!
//! Lists the matrix files in a directory, asks for two of them and an
//! operation, and prints the resulting matrix.

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use smtx::{ops, read_matrix, CooMatrix, Op, SmtxError, SparseMatrix};

#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Combine sparse matrix text files with add, subtract, or multiply")]
struct Cli {
    /// Directory containing matrix .txt files
    #[arg(default_value = "matrices")]
    dir: PathBuf,

    /// Operation to perform (add, subtract, multiply); prompted for when omitted
    #[arg(long)]
    op: Option<String>,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(&cli) {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example matrix_cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<(), String> {
    let files = matrix_files(&cli.dir)?;
    if files.len() < 2 {
        return Err("at least two matrix files must be present".into());
    }

    println!("\nAvailable Matrix Files:");
    for (index, file) in files.iter().enumerate() {
        println!("{}. {}", index + 1, file.display());
    }

    let first = select(&files, "\nSelect the first matrix (enter number): ")?;
    let second = select(&files, "Select the second matrix (enter number): ")?;

    let name = match &cli.op {
        Some(name) => name.clone(),
        None => prompt("\nChoose an operation (Add, Subtract, Multiply): ")?,
    };
    let op = Op::from_name(&name).ok_or_else(|| format!("unsupported operation '{name}'"))?;

    println!("\nLoading selected matrices...");
    let a = load(first)?;
    let b = load(second)?;

    print_info("Matrix 1", &a);
    print_info("Matrix 2", &b);

    ops::validate_compatible(&a, &b, op).map_err(report)?;

    let result = match op {
        Op::Add => ops::add(&a, &b),
        Op::Subtract => ops::subtract(&a, &b),
        Op::Multiply => ops::multiply(&a, &b),
    }
    .map_err(report)?;

    println!("\nResulting Matrix:");
    print!("{result}");
    Ok(())
}

/// Candidate matrix files in the directory, sorted by name
#[cfg(feature = "cli")]
fn matrix_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    if !dir.is_dir() {
        return Err(format!("directory '{}' not found", dir.display()));
    }
    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("cannot list '{}': {e}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(feature = "cli")]
fn prompt(message: &str) -> Result<String, String> {
    print!("{message}");
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "cli")]
fn select<'a>(files: &'a [PathBuf], message: &str) -> Result<&'a Path, String> {
    let answer = prompt(message)?;
    let choice: usize = answer
        .parse()
        .map_err(|_| "invalid selection, please enter a listed number".to_string())?;
    if choice == 0 || choice > files.len() {
        return Err("invalid selection, please enter a listed number".into());
    }
    Ok(&files[choice - 1])
}

#[cfg(feature = "cli")]
fn load(path: &Path) -> Result<CooMatrix, String> {
    let matrix = read_matrix(path).map_err(report)?;
    println!("Matrix loaded from '{}'.", path.display());
    Ok(matrix)
}

#[cfg(feature = "cli")]
fn print_info<M: SparseMatrix>(label: &str, matrix: &M) {
    let (nrows, ncols) = matrix.dimensions();
    println!("{label}: {nrows} x {ncols}, {} stored entries", matrix.nnz());
}

#[cfg(feature = "cli")]
fn report(error: SmtxError) -> String {
    format!("{error} ({})", error.category())
}
