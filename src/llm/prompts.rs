use crate::analysis::Section;

/// Build the product-manager analysis prompt for a transcript.
///
/// The closing instruction lists every section label, which is what the
/// section parser later splits on.
pub fn build_analysis_prompt(transcript_json: &str) -> String {
    let labels = Section::ALL
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert product manager, who is an expert at understanding business needs and breaking them down to engineering.\n\
Given the following transcript in JSON format:\n\
\n\
{transcript_json}\n\
\n\
Analyze the transcript and provide the following outputs:\n\
1. **User Stories:** Create a series of user stories in the format: \"As a [user persona], I want [goal], so that [benefit]\".\n\
2. **Epics:** Create a series of Epics. Each user story should be assigned to an Epic.\n\
3. **Ambiguity Analysis:** Identify any user stories that you feel are ambiguous and require further user feedback or clarification. Clearly indicate why human review is required.\n\
4. **Problem Statement:** Generate a simple problem statement for the initiative that encompasses all user stories and provides an executive summary of the problem being solved.\n\
5. **Success Criteria:** Generate a single success criteria statement for the initiative. Ensure that this criteria is SMART (Specific, Measurable, Achievable, Relevant, Time-bound) and define how it could be measured.\n\
\n\
Please provide the response in plain text format, with clear sections for each output and clear titles to easily identify each section such as {labels}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_transcript_and_every_label() {
        let prompt = build_analysis_prompt(r#"{"speaker":"Ana","text":"Reports take a day"}"#);

        assert!(prompt.contains(r#"{"speaker":"Ana","text":"Reports take a day"}"#));
        for section in Section::ALL {
            assert!(prompt.contains(section.label()), "missing {}", section.label());
        }
        assert!(prompt.ends_with("Problem Statement:, Success Criteria:"));
    }
}
