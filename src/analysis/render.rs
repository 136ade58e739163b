//! Output rendering for analysis results

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::analysis::{Analysis, ParsedAnalysis, Section};

/// Render every section in canonical order, leaving absent sections blank.
pub fn render_text(parsed: &ParsedAnalysis) -> String {
    let mut output = String::from("Analysis Results\n");

    for section in Section::ALL {
        output.push('\n');
        output.push_str(section.label());
        output.push('\n');
        if let Some(body) = parsed.get(section).filter(|b| !b.is_empty()) {
            output.push_str(body);
            output.push('\n');
        }
    }

    output
}

/// Render an analysis as a JSON object with one field per section.
///
/// Absent sections are `null`. `raw` carries the unparsed model output when
/// `include_raw` is set.
pub fn render_json(analysis: &Analysis, include_raw: bool) -> Value {
    let mut sections = Map::new();
    for section in Section::ALL {
        let body = analysis
            .sections
            .get(section)
            .map_or(Value::Null, |b| Value::String(b.to_string()));
        sections.insert(section.key().to_string(), body);
    }

    let missing: Vec<&str> = analysis
        .sections
        .missing()
        .iter()
        .map(|s| s.key())
        .collect();

    let mut output = json!({
        "sections": sections,
        "missing": missing,
        "generated_at": Utc::now().to_rfc3339(),
    });

    if include_raw {
        output["raw"] = Value::String(analysis.raw.clone());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parse_sections;

    #[test]
    fn text_lists_all_sections_in_canonical_order() {
        let parsed = parse_sections("Success Criteria: 90% adoption\nUser Stories: As a PM...");
        let text = render_text(&parsed);

        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| text.find(s.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("User Stories:\nAs a PM...\n"));
        assert!(text.contains("Epics:\n\nAmbiguity Analysis:\n"));
        assert!(text.ends_with("Success Criteria:\n90% adoption\n"));
    }

    #[test]
    fn text_for_empty_analysis_has_blank_regions() {
        let text = render_text(&ParsedAnalysis::default());
        assert_eq!(
            text,
            "Analysis Results\n\nUser Stories:\n\nEpics:\n\nAmbiguity Analysis:\n\nProblem Statement:\n\nSuccess Criteria:\n"
        );
    }

    #[test]
    fn json_marks_absent_sections_null() {
        let analysis = Analysis::from_raw("Epics:\nEpic A\nProblem Statement:\nSolve X".to_string());
        let value = render_json(&analysis, false);

        assert_eq!(value["sections"]["epics"], "Epic A");
        assert_eq!(value["sections"]["problem_statement"], "Solve X");
        assert!(value["sections"]["user_stories"].is_null());
        assert_eq!(
            value["missing"],
            json!(["user_stories", "ambiguity_analysis", "success_criteria"])
        );
        assert!(value.get("raw").is_none());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn json_includes_raw_on_request() {
        let analysis = Analysis::from_raw("no labels here".to_string());
        let value = render_json(&analysis, true);

        assert_eq!(value["raw"], "no labels here");
        assert_eq!(value["missing"].as_array().map(Vec::len), Some(5));
    }
}
