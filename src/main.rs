use micropm::{
    DirectorySink, DocumentSource, ExportConfig, ExportFormat, ExportPipeline, PERSONA_COLLECTION_TITLE,
    PersonaState, PipelineBuilder, PipelineError, PrdState, RoadmapState, SurveyTemplate,
};
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use std::path::Path;

const TOOLS: &str = "prd | persona | personas | roadmap | survey";

fn usage(program: &str) -> ! {
    eprintln!("Export MicroPM tool state as Markdown or PDF.");
    eprintln!();
    eprintln!(
        "Usage: {} <tool> <path/to/state.json> <path/to/output-dir> [md|pdf|clipboard]",
        program
    );
    eprintln!();
    eprintln!("  tool: {}", TOOLS);
    eprintln!("  Set MICROPM_CONFIG to a JSON file to override layout, styles or filenames.");
    std::process::exit(1);
}

/// Where the rendered export goes.
enum Target {
    File(ExportFormat),
    Clipboard,
}

fn parse_target(arg: Option<&str>) -> Result<Target, PipelineError> {
    match arg {
        None => Ok(Target::File(ExportFormat::Markdown)),
        Some("clipboard") => Ok(Target::Clipboard),
        Some(format) => Ok(Target::File(format.parse()?)),
    }
}

fn load<T: DeserializeOwned>(path: &str) -> Result<T, PipelineError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

fn run<S: DocumentSource>(
    pipeline: &ExportPipeline,
    source: &S,
    output_dir: &Path,
    target: Target,
) -> Result<(), PipelineError> {
    match target {
        Target::File(format) => {
            let sink = DirectorySink::new(output_dir)?;
            let artifact = pipeline.export(source, format, &sink)?;
            println!("Wrote {}", output_dir.join(&artifact.filename).display());
        }
        Target::Clipboard => {
            let clipboard = pipeline.system_clipboard();
            pipeline.copy_markdown(source, &clipboard)?;
            println!("Copied Markdown to the clipboard");
        }
    }
    Ok(())
}

/// A simple CLI exporting one tool's saved state.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        usage(&args[0]);
    }

    let tool = args[1].as_str();
    let input_path = &args[2];
    let output_dir = Path::new(&args[3]);
    let target = parse_target(args.get(4).map(String::as_str))?;

    let pipeline = PipelineBuilder::new()
        .with_config(ExportConfig::from_env()?)
        .build()?;

    log::info!("Loading {} state from {}", tool, input_path);
    match tool {
        "prd" => run(&pipeline, &load::<PrdState>(input_path)?, output_dir, target),
        "persona" => run(&pipeline, &load::<PersonaState>(input_path)?, output_dir, target),
        "roadmap" => run(&pipeline, &load::<RoadmapState>(input_path)?, output_dir, target),
        "survey" => run(&pipeline, &load::<SurveyTemplate>(input_path)?, output_dir, target),
        "personas" => {
            if !matches!(target, Target::File(ExportFormat::Markdown)) {
                return Err(PipelineError::UnsupportedFormat(
                    "the persona collection is exported as Markdown only".to_string(),
                ));
            }
            let personas: Vec<PersonaState> = load(input_path)?;
            let sink = DirectorySink::new(output_dir)?;
            let artifact =
                pipeline.export_markdown_collection(PERSONA_COLLECTION_TITLE, &personas, &sink)?;
            println!("Wrote {}", output_dir.join(&artifact.filename).display());
            Ok(())
        }
        _ => usage(&args[0]),
    }
}
