//! Interactive shell: one raw JSON array form per line, printed back as the
//! normalized array form and the assembled tree.
//!
//! Usage: `filter_shell [config.toml]`
use datafilter::{
    Error, FilterConfig, Pipeline,
    core::{error::FilterError, filter::Ir},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "filter> ";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FilterConfig::from_path(path).map_err(Error::from)?,
        None => FilterConfig::default(),
    };
    let pipeline = Pipeline::new(config);

    let mut editor = DefaultEditor::new()?;
    println!("datafilter {} (:q to quit)", datafilter::VERSION);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, ":q" | ":quit") {
                    break;
                }

                editor.add_history_entry(line)?;

                match evaluate(&pipeline, line) {
                    Ok(output) => println!("{output}"),
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn evaluate(pipeline: &Pipeline, line: &str) -> Result<String, Error> {
    let ir = Ir::from_json_str(line).map_err(FilterError::from)?;
    let normalized = pipeline
        .normalize(ir.clone())?
        .to_json_string()
        .map_err(FilterError::from)?;
    let tree = pipeline.parse(ir)?;
    let tree = serde_json::to_string_pretty(&tree).map_err(FilterError::from)?;

    Ok(format!("normalized: {normalized}\ntree:\n{tree}"))
}
