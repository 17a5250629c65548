use folio::{PipelineBuilder, PipelineError};
use std::env;
use std::fs;

/// A small CLI that paginates a bill template against runtime data and
/// prints the page layout as JSON.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Paginates a bill template against runtime data.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/template.json> <path/to/data.json> [path/to/output.json]",
            args[0]
        );
        eprintln!();
        eprintln!("Set RUST_LOG=debug to trace page break decisions.");
        std::process::exit(1);
    }

    let template_path = &args[1];
    let data_path = &args[2];

    log::info!("Loading template from {}", template_path);
    let pipeline = PipelineBuilder::new()
        .with_template_file(template_path)?
        .build()?;

    log::info!("Loading data from {}", data_path);
    let data_json = fs::read_to_string(data_path)?;
    let data = serde_json::from_str(&data_json).map_err(PipelineError::Data)?;

    let outcome = pipeline.preview(&data);
    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }
    let layout = serde_json::to_string_pretty(&outcome.document).map_err(PipelineError::Serialize)?;

    match args.get(3) {
        Some(output_path) => {
            fs::write(output_path, layout)?;
            log::info!(
                "Wrote {} pages to {}",
                outcome.document.total_pages,
                output_path
            );
        }
        None => println!("{}", layout),
    }
    Ok(())
}
