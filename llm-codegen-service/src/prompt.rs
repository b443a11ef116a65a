//! Prompt construction.
//!
//! Pure and deterministic: equal specs always yield byte-identical prompt
//! pairs. User-supplied text is embedded verbatim, without escaping; prompt
//! injection hardening is intentionally out of scope here.

use crate::spec::AppSpec;

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are an expert MVP developer generating code for a simple web application.
Output only the raw code (HTML, CSS, JavaScript).
Structure the output clearly, using comments like /* file: index.html */, /* file: style.css */, /* file: script.js */ before each section.
Do not include explanations, notes, or markdown formatting (like ```) around the code blocks.
Focus on creating functional, basic code suitable for a Minimum Viable Product.
Ensure the generated HTML references the CSS and JavaScript files correctly if generated separately.
Prioritize simplicity and core functionality based on the user's request.";

/// Phrase substituted when the normalized spec has no features.
pub const FEATURES_FALLBACK: &str = "basic functionality described.";

/// System instruction plus the user instruction derived from one spec.
///
/// Owned by a single pipeline invocation; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

/// Builds the prompt pair for a normalized spec.
pub fn build_prompt(spec: &AppSpec) -> PromptPair {
    let feature_list = if spec.features.is_empty() {
        FEATURES_FALLBACK.to_string()
    } else {
        spec.features.join(", ")
    };

    let user = format!(
        "Create a simple web app named '{}'.\n\
         Description: '{}'.\n\
         Key features: {}.\n\
         Generate the necessary HTML (index.html), CSS (style.css), and JavaScript (script.js).\n\
         Remember to structure the output with /* file: ... */ comments before each section.",
        spec.app_name, spec.description, feature_list
    );

    PromptPair {
        system: SYSTEM_PROMPT,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{DEFAULT_APP_NAME, DEFAULT_DESCRIPTION};

    fn spec(name: &str, description: &str, features: &[&str]) -> AppSpec {
        AppSpec {
            app_name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn build_is_deterministic() {
        let s = spec("Test App", "A simple testing application.", &["A", "B"]);
        assert_eq!(build_prompt(&s), build_prompt(&s));
    }

    #[test]
    fn user_prompt_embeds_name_description_and_features() {
        let s = spec(
            "Test App",
            "A simple testing application.",
            &["Feature A", "Feature B"],
        );
        let pair = build_prompt(&s);
        assert!(pair.user.contains("Create a simple web app named 'Test App'."));
        assert!(pair.user.contains("Description: 'A simple testing application.'."));
        assert!(pair.user.contains("Key features: Feature A, Feature B."));
    }

    #[test]
    fn empty_feature_list_uses_fallback_phrase() {
        let s = spec(DEFAULT_APP_NAME, DEFAULT_DESCRIPTION, &[]);
        let pair = build_prompt(&s);
        assert!(pair.user.contains("Create a simple web app named 'My Simple App'."));
        assert!(pair.user.contains("Description: 'A basic web application.'."));
        assert!(pair.user.contains("Key features: basic functionality described."));
    }

    #[test]
    fn system_prompt_demands_raw_code_with_file_markers() {
        let pair = build_prompt(&spec("X", "Y", &[]));
        assert!(pair.system.contains("Output only the raw code"));
        assert!(pair.system.contains("/* file: index.html */"));
        assert!(pair.system.contains("Do not include explanations"));
    }
}
