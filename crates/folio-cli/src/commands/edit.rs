//! Page editing command

use super::{read_page, to_pretty_json};
use anyhow::{Context, Result};
use folio_command::{compute_page_diff, CommandInterpreter, History};
use folio_core::FolioError;
use folio_library::SectionLibrary;
use tracing::warn;

pub struct EditArgs {
    pub page: String,
    pub commands: Vec<String>,
    pub diff: bool,
    pub output: Option<String>,
}

pub fn run(library: &SectionLibrary, args: EditArgs) -> Result<()> {
    let initial = read_page(&args.page)?;
    let interpreter = CommandInterpreter::new(library);
    let mut history = History::new(initial.clone());

    for command in &args.commands {
        match command.trim().to_ascii_lowercase().as_str() {
            "undo" => {
                if history.undo().is_none() {
                    report_empty("undo");
                }
            }
            "redo" => {
                if history.redo().is_none() {
                    report_empty("redo");
                }
            }
            _ => {
                let interpretation = interpreter.interpret(command, history.current());
                for warning in &interpretation.warnings {
                    eprintln!("Warning: {}", warning);
                }
                if let Some(transform) = interpretation.combined(command.as_str()) {
                    history.apply(&transform);
                    eprintln!("Applied: {}", interpretation.intents.join(", "));
                }
            }
        }
    }

    let page = history.current();
    if let Some(path) = &args.output {
        std::fs::write(path, to_pretty_json(&page)?)
            .with_context(|| format!("Failed to write {}", path))?;
        eprintln!("Page saved to {}", path);
    }

    if args.diff {
        print!("{}", compute_page_diff(&initial, page)?);
    } else if args.output.is_none() {
        println!("{}", to_pretty_json(&page)?);
    }
    Ok(())
}

fn report_empty(action: &'static str) {
    let err = FolioError::EmptyHistory(action);
    warn!("{}", err);
    eprintln!("Warning: {}", err);
}
