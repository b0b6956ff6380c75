mod cli;
mod output;

use clap::Parser;
use cli::Cli;
use output::ResolveResult;
use pkgver::resolver;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let resolution = resolver::resolve(&cli.package, &start)?;

    if cli.json {
        output::print_json(&ResolveResult::new(
            &cli.package,
            resolution.version.as_deref(),
            &resolution.project_root.display().to_string(),
            &resolution.manifest_path.display().to_string(),
        ));
    } else {
        match &resolution.version {
            Some(version) => println!("{}", version),
            None => eprintln!(
                "{} has no version field in {}",
                cli.package,
                resolution.manifest_path.display()
            ),
        }
    }

    Ok(())
}
