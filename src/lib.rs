pub mod args;
pub mod convert;
pub mod errors;
pub mod extractor;
pub mod parser;
pub mod report;

pub use args::{Cli, Commands, PipeArgs, ScanArgs, SuggestArgs};
pub use convert::{convert_declarations, convert_property};
pub use errors::{ConvertError, Result};
pub use extractor::{collect_inline_styles, find_inline_styles, StyleOccurrence};
pub use parser::{normalize_property, parse_style_object, StyleDeclarations};
pub use report::{convert_source, render_report, Report, Suggestion};

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Convert every inline style in one file
pub fn convert_file(path: &Path) -> Result<Vec<Suggestion>> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound(path.display().to_string()));
    }

    let source = fs::read_to_string(path).map_err(|e| ConvertError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(convert_source(&source))
}

/// Collect files matching the given glob patterns
fn collect_files(patterns: &[String], exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;

            if should_exclude(&path, exclude_patterns)? {
                continue;
            }

            if path.is_dir() {
                continue;
            }

            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Check if a path should be excluded
fn should_exclude(path: &Path, exclude_patterns: &[String]) -> Result<bool> {
    for pattern in exclude_patterns {
        let pattern = glob::Pattern::new(pattern)?;
        if pattern.matches_path(path) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run the converter over every file matching the scan patterns
pub fn scan(args: &ScanArgs) -> Result<Report> {
    use rayon::prelude::*;

    args.validate().map_err(ConvertError::InvalidInput)?;

    if let Some(jobs) = args.jobs {
        // Ignore the error if the global pool was already initialized
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global();
    }

    let files = collect_files(&args.input, &args.exclude)?;
    if files.is_empty() {
        return Err(ConvertError::NoFilesFound);
    }

    if args.verbose {
        eprintln!("Found {} files to scan", files.len());
    }

    let progress_bar = if args.verbose {
        None
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(pb)
    };

    let results: Vec<(PathBuf, Result<Vec<Suggestion>>)> = files
        .par_iter()
        .map(|path| {
            let result = convert_file(path);
            if let Some(ref pb) = progress_bar {
                pb.inc(1);
                pb.set_message(
                    path.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string(),
                );
            }
            (path.clone(), result)
        })
        .collect();

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let mut report = Report::new();
    for (path, result) in results {
        report.add_file(path.display().to_string(), result?);
    }

    Ok(report)
}

/// Interactive mode: prompt for a file path, convert it, print the report.
///
/// A missing file is reported on stderr but is not a process failure; the
/// tool is human-facing and the user simply re-runs it.
pub fn run_prompt(args: &SuggestArgs) -> Result<()> {
    let relative = match &args.file {
        Some(file) => file.clone(),
        None => {
            print!("Enter file path (relative to {}): ", args.base_dir.display());
            std::io::stdout().flush()?;

            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            PathBuf::from(line.trim())
        }
    };

    let path = args.base_dir.join(&relative);
    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        return Ok(());
    }

    let suggestions = convert_file(&path)?;
    print!("{}", render_report(&path.display().to_string(), &suggestions));

    Ok(())
}

/// Pipe mode: read source text from stdin, write the report to stdout
pub fn run_pipe(args: &PipeArgs) -> Result<()> {
    let input = std::io::read_to_string(std::io::stdin().lock())?;
    let suggestions = convert_source(&input);

    if args.json {
        let mut report = Report::new();
        report.add_file("stdin".to_string(), suggestions);
        println!("{}", report.to_pretty_json()?);
    } else {
        print!("{}", render_report("stdin", &suggestions));
    }

    Ok(())
}

/// Write a JSON report, creating parent directories as needed
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, report.to_pretty_json()?).map_err(|e| ConvertError::OutputError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
