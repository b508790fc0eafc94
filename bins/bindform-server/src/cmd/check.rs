use std::path::Path;

use crate::config::ServerConfig;
use crate::error::ServerError;

pub fn run(config_path: &Path) -> Result<(), ServerError> {
    let config = ServerConfig::from_file(config_path)?;
    let summary = summarize(&config)?;
    for line in &summary.lines {
        println!("{line}");
    }
    if summary.unbindable > 0 {
        return Err(ServerError::Config {
            context: "check",
            detail: format!("{} field(s) with a type that cannot be bound", summary.unbindable),
        });
    }
    Ok(())
}

struct Summary {
    lines: Vec<String>,
    unbindable: usize,
}

/// One line per form (sorted by name), followed by one line per field
/// whose type cannot be bound.
fn summarize(config: &ServerConfig) -> Result<Summary, ServerError> {
    let forms = config.resolve_forms()?;
    let mut names: Vec<_> = forms.keys().collect();
    names.sort();

    let mut summary = Summary { lines: Vec::new(), unbindable: 0 };
    for name in names {
        let entry = &forms[name];
        summary.lines.push(format!(
            "{name}: {} field(s), source {:?}",
            entry.schema.fields.len(),
            entry.source
        ));
        for spec in entry.schema.unsupported_fields() {
            summary.unbindable += 1;
            summary.lines.push(format!("  {}: unsupported type '{}'", spec.name, spec.type_name));
        }
    }
    Ok(summary)
}
