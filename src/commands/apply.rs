//! `remap apply` command.

use crate::cli::ApplyArgs;
use crate::context::ServiceContext;
use crate::error::RemapError;
use crate::mapping::{self, Mapping, Remapped};
use crate::parse::parse_mapping;
use crate::render::render;

/// Execute the `apply` command.
///
/// Parses both mappings, remaps the source through the target and emits
/// the rendered result. Each missing lookup key is reported as a warning
/// unless `quiet` is set. With `strict`, any missing key fails the command
/// and nothing is emitted.
///
/// # Errors
///
/// Returns an error string if either argument is not a flat string mapping,
/// if rendering fails, or if `strict` is set and a lookup key is missing.
pub fn run_with_context(ctx: &ServiceContext, args: &ApplyArgs) -> Result<(), String> {
    let source = parse_mapping("source", &args.source, args.input_format)
        .map_err(|e| e.to_string())?;
    let target = parse_mapping("target", &args.target, args.input_format)
        .map_err(|e| e.to_string())?;

    let result = mapping::remap(&source, &target);

    if !args.quiet {
        report_missing(ctx, &source, &result);
    }
    if args.strict {
        let missing = mapping::missing_keys(&result);
        if !missing.is_empty() {
            let keys = missing.into_iter().cloned().collect();
            return Err(RemapError::MissingLookupKeys { keys }.to_string());
        }
    }

    let text = render(&result, args.output).map_err(|e| e.to_string())?;
    ctx.sink.emit(&text);
    Ok(())
}

fn report_missing(
    ctx: &ServiceContext,
    source: &Mapping<String, String>,
    result: &Remapped<String, String>,
) {
    for key in mapping::missing_keys(result) {
        let lookup = source.get(key).map_or("", String::as_str);
        ctx.sink.warn(&format!(
            "source key '{key}' looks up '{lookup}', which is missing from the target"
        ));
    }
}
