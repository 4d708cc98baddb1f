//! `remap demo` command.

use crate::context::ServiceContext;
use crate::mapping::{self, Mapping};
use crate::render::{render, OutputStyle};

const DEMO_SOURCE: [(&str, &str); 3] = [("a", "x"), ("b", "y"), ("c", "z")];
const DEMO_TARGET: [(&str, &str); 3] = [("x", "ABC1"), ("y", "BCD1"), ("z", "DEF1")];

/// Execute the `demo` command.
///
/// Remaps `{a: x, b: y, c: z}` through `{x: ABC1, y: BCD1, z: DEF1}` and
/// emits the result.
///
/// # Errors
///
/// Returns an error string if rendering fails.
pub fn run_with_context(ctx: &ServiceContext, output: OutputStyle) -> Result<(), String> {
    let source: Mapping<&str, &str> = DEMO_SOURCE.into_iter().collect();
    let target: Mapping<&str, &str> = DEMO_TARGET.into_iter().collect();

    let result = mapping::remap(&source, &target);
    let text = render(&result, output).map_err(|e| e.to_string())?;
    ctx.sink.emit(&text);
    Ok(())
}
