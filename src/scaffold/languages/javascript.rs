//! JavaScript scaffold

use crate::models::Language;
use crate::scaffold::{ScaffoldContext, ScaffoldTemplate};

/// Get template for JavaScript
pub fn template() -> ScaffoldTemplate {
    ScaffoldTemplate {
        language: Language::JavaScript,
        comment_marker: "//",
        render,
    }
}

fn render(context: &ScaffoldContext<'_>, placeholder: &str) -> String {
    format!(
        "function {}(arr) {{\n  {}\n  \n  return arr;\n}}",
        context.function_name, placeholder
    )
}
