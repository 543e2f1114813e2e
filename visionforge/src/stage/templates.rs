//! Prompt templates for the four pipeline stages.
//!
//! Each template carries `{placeholder}` markers that rendering
//! substitutes with named inputs. Placeholder names are part of the
//! stage contract; reword the surrounding instructions freely, but
//! keep the markers.

/// Turns a project description into requirements-gathering
/// instructions.
pub const PROJECT_MANAGER: &str = r"As a project manager, provide detailed instructions for gathering initial requirements for this project:

Project Description: {project_description}

Your task:
1. Analyze the project description
2. Identify key stakeholders
3. List 5-7 specific areas to focus on for requirements gathering
4. Provide 3-5 targeted questions for each area
5. Suggest any potential challenges or considerations

Please provide a structured response with clear headings and bullet points.";

/// Simulates stakeholder interviews from the project manager's
/// instructions.
pub const STAKEHOLDER_INTERVIEW: &str = r"As a stakeholder interviewer, conduct simulated interviews based on these instructions and provide initial requirements:

Instructions: {instructions}

Your task:
1. Simulate interviews with key stakeholders identified
2. For each stakeholder:
    a. Introduce the stakeholder (role, perspective)
    b. List 5-7 key requirements they might have
    c. Provide any concerns or constraints they might mention
3. Summarize common themes across all interviews
4. Highlight any conflicting requirements between stakeholders

Please provide a structured response with clear headings for each stakeholder and a summary section.";

/// Refines and categorizes the initial requirements.
pub const REQUIREMENTS_ANALYZER: &str = r"As a requirements analyzer, refine and categorize these initial requirements:

Initial Requirements: {initial_requirements}

Your task:
1. Categorize requirements into:
    a. Functional Requirements
    b. Non-Functional Requirements
    c. Technical Requirements
    d. User Interface Requirements
    e. Security Requirements
2. For each category:
    a. List and number each requirement
    b. Prioritize requirements (High, Medium, Low)
    c. Identify any dependencies between requirements
3. Highlight any ambiguous or conflicting requirements
4. Suggest 3-5 additional requirements that might have been overlooked

Please provide a structured response with clear headings for each category and a summary of key findings.";

/// Compiles the final requirements document.
pub const DOCUMENTATION: &str = r"As a documentation specialist, compile a final requirements document based on these refined requirements:

Refined Requirements: {refined_requirements}

Your task:
1. Create an executive summary (2-3 paragraphs)
2. Provide a table of contents
3. For each category of requirements:
    a. Provide a brief introduction
    b. List all requirements in a numbered format
    c. Include priority and any dependencies for each requirement
4. Create a glossary of technical terms used
5. Add a section on assumptions and constraints
6. Include a section on future considerations or potential enhancements

Please format the document with clear headings, subheadings, and use bullet points or numbered lists where appropriate.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholder() {
        assert!(PROJECT_MANAGER.contains("{project_description}"));
        assert!(STAKEHOLDER_INTERVIEW.contains("{instructions}"));
        assert!(REQUIREMENTS_ANALYZER.contains("{initial_requirements}"));
        assert!(DOCUMENTATION.contains("{refined_requirements}"));
    }

    #[test]
    fn test_templates_carry_exactly_one_placeholder() {
        for template in [
            PROJECT_MANAGER,
            STAKEHOLDER_INTERVIEW,
            REQUIREMENTS_ANALYZER,
            DOCUMENTATION,
        ] {
            let opens = template.matches('{').count();
            let closes = template.matches('}').count();
            assert_eq!(opens, 1);
            assert_eq!(closes, 1);
        }
    }
}
