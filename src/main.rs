use clap::Parser;
use tailwind_converter::{run_pipe, run_prompt, scan, write_report, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest(args) => {
            run_prompt(&args)?;
            Ok(())
        }
        Commands::Scan(args) => match scan(&args) {
            Ok(report) => {
                if let Some(path) = &args.output_report {
                    write_report(path, &report)?;
                    println!("Report written to {}", path.display());
                } else if args.json {
                    println!("{}", report.to_pretty_json()?);
                } else {
                    for (path, suggestions) in &report.files {
                        if suggestions.is_empty() {
                            continue;
                        }
                        print!("{}", tailwind_converter::render_report(path, suggestions));
                        println!();
                    }
                    println!(
                        "Scanned {} files, found {} inline styles",
                        report.metadata.files_processed, report.metadata.styles_found
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Pipe(args) => {
            run_pipe(&args)?;
            Ok(())
        }
    }
}
