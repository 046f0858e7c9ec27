//! Python scaffold

use crate::models::Language;
use crate::scaffold::{ScaffoldContext, ScaffoldTemplate};

/// Get template for Python
pub fn template() -> ScaffoldTemplate {
    ScaffoldTemplate {
        language: Language::Python,
        comment_marker: "#",
        render,
    }
}

fn render(context: &ScaffoldContext<'_>, placeholder: &str) -> String {
    // Python identifiers in the scaffold are lowercase
    format!(
        "def {}(arr):\n    {}\n    \n    return arr",
        context.function_name.to_lowercase(),
        placeholder
    )
}
