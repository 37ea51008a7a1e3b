use std::path::PathBuf;
use std::process::ExitCode;

use colored::*;
use s3_hash_upload::{app, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        eprintln!("{}", "usage: s3-hash-upload <file> [file ...]".yellow());
        return ExitCode::from(2);
    }

    let mut stdout = std::io::stdout();
    match app::run(&files, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
