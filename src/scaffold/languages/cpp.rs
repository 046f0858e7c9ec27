//! C++ scaffold: in-place mutation, no return value

use crate::models::Language;
use crate::scaffold::{ScaffoldContext, ScaffoldTemplate};

/// Get template for C++
pub fn template() -> ScaffoldTemplate {
    ScaffoldTemplate {
        language: Language::Cpp,
        comment_marker: "//",
        render,
    }
}

fn render(context: &ScaffoldContext<'_>, placeholder: &str) -> String {
    format!(
        "#include <bits/stdc++.h>\nusing namespace std;\n\nvoid {}(vector<int>& arr, int n)\n{{\n    {}\n}}\n\n",
        context.function_name, placeholder
    )
}
