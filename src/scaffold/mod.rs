//! Starter code generation
//!
//! Scaffolds are pure functions of (algorithm name, language): identical
//! inputs always yield byte-identical text. Each language owns a template in
//! `languages/`, and the exhaustive match in [`ScaffoldTemplate::for_language`]
//! makes a new [`Language`] variant a compile error until it has one.

pub mod languages;

use crate::models::Language;

/// Values substituted into a language template
#[derive(Debug, Clone)]
pub struct ScaffoldContext<'a> {
    /// Algorithm display name, e.g. "Bubble Sort"
    pub display_name: &'a str,
    /// Display name with whitespace stripped, e.g. "BubbleSort"
    pub function_name: String,
}

impl<'a> ScaffoldContext<'a> {
    pub fn new(display_name: &'a str) -> Self {
        Self {
            display_name,
            function_name: function_name(display_name),
        }
    }

    /// Comment text placed where the learner writes the algorithm
    pub fn placeholder(&self, comment_marker: &str) -> String {
        format!(
            "{} Implement your {} algorithm here",
            comment_marker, self.display_name
        )
    }
}

/// Per-language scaffold rule
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldTemplate {
    language: Language,
    comment_marker: &'static str,
    render: fn(&ScaffoldContext<'_>, &str) -> String,
}

impl ScaffoldTemplate {
    /// Template for a language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::JavaScript => languages::javascript::template(),
            Language::Python => languages::python::template(),
            Language::Java => languages::java::template(),
            Language::Cpp => languages::cpp::template(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Line comment marker of the language
    pub fn comment_marker(&self) -> &'static str {
        self.comment_marker
    }

    /// Render the starter code for an algorithm
    pub fn render(&self, display_name: &str) -> String {
        let context = ScaffoldContext::new(display_name);
        let placeholder = context.placeholder(self.comment_marker);
        (self.render)(&context, &placeholder)
    }

    /// Starter text for the free-run playground
    pub fn playground_placeholder(&self) -> String {
        format!("{} Write your code here\n", self.comment_marker)
    }
}

/// Strip all whitespace from a display name to form an identifier
pub fn function_name(display_name: &str) -> String {
    display_name.split_whitespace().collect()
}

/// Starter code for a known language
pub fn render(display_name: &str, language: Language) -> String {
    ScaffoldTemplate::for_language(language).render(display_name)
}

/// Starter code for a language id; unknown ids yield the empty string
pub fn generate(display_name: &str, language_id: &str) -> String {
    match Language::from_id(language_id) {
        Some(language) => render(display_name, language),
        None => String::new(),
    }
}

/// Starter text for the free-run playground
pub fn playground_placeholder(language: Language) -> String {
    ScaffoldTemplate::for_language(language).playground_placeholder()
}
