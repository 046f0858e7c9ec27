//! Java scaffold

use crate::models::Language;
use crate::scaffold::{ScaffoldContext, ScaffoldTemplate};

/// Get template for Java
pub fn template() -> ScaffoldTemplate {
    ScaffoldTemplate {
        language: Language::Java,
        comment_marker: "//",
        render,
    }
}

fn render(context: &ScaffoldContext<'_>, placeholder: &str) -> String {
    format!(
        "public class {} {{\n    public static int[] sort(int[] arr) {{\n        {}\n        \n        return arr;\n    }}\n}}",
        context.function_name, placeholder
    )
}
