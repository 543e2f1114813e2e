//! Prompt rendering for stage templates.

use super::StageDefinition;
use crate::errors::TemplateError;
use std::collections::HashMap;

/// Renders a stage prompt from its template and named inputs.
///
/// Every `{placeholder}` named in the definition's required inputs is
/// substituted with the matching value. A non-empty refinement is
/// appended after the template body. Rendering is pure: the same
/// arguments always produce the same prompt.
///
/// # Errors
///
/// Returns [`TemplateError`] when a required input is missing.
pub fn render(
    definition: &StageDefinition,
    inputs: &HashMap<String, String>,
    refinement: Option<&str>,
) -> Result<String, TemplateError> {
    let mut prompt = definition.template.to_string();

    for placeholder in definition.required_inputs {
        let value = inputs
            .get(*placeholder)
            .ok_or_else(|| TemplateError::new(definition.name, *placeholder))?;
        prompt = prompt.replace(&format!("{{{}}}", placeholder), value);
    }

    if let Some(text) = refinement {
        if !text.is_empty() {
            prompt.push_str("\n\nRefinement Instructions: ");
            prompt.push_str(text);
        }
    }

    Ok(prompt)
}
