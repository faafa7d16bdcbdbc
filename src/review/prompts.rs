//! System prompts for the review pipeline.

/// Standalone review of one file, chunk by chunk
pub const SINGLE_FILE_REVIEWER: &str = "You are an expert code reviewer. Find bugs and \
    anti-patterns, suggest improvements with short examples, and finish with an overall \
    assessment of the code.";

/// Condenses a file so the combined pass fits a model window. Summaries must
/// describe behavior only, or the architectural pass reviews the
/// summarizer's opinions instead of the code.
pub const FILE_SUMMARIZER: &str = "You are an expert code reviewer. Produce a very short \
    summary (5-7 bullet points) of what the code below does. Describe behavior only; do \
    not suggest improvements.";

/// Cross-module review over the combined per-file summaries
pub fn project_reviewer(file_names: &[String]) -> String {
    format!(
        "You are an expert software architect. Analyze the following files together, find \
         problems in how the modules interact, propose refactorings where needed with short \
         examples, and finish with an overall assessment of the code. Project files: {}.",
        file_names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_reviewer_names_all_files() {
        let names = vec!["main.rs".to_string(), "lib.rs".to_string()];
        let prompt = project_reviewer(&names);
        assert!(prompt.contains("main.rs, lib.rs"));
    }

    #[test]
    fn test_summarizer_forbids_recommendations() {
        assert!(FILE_SUMMARIZER.contains("do not suggest improvements"));
    }
}
