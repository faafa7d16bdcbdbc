use crate::config::Config;
use crate::error::{ReviewAgentError, Result};
use crate::openai::{ChatMessage, OpenAiClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

pub mod chunker;
pub mod prompts;

/// Review one or more files.
///
/// A single path gets a standalone review; several paths get per-file
/// summaries followed by a combined architectural pass, so the model sees
/// the project as a whole without blowing the context window.
pub fn review_paths(client: &OpenAiClient, config: &Config, paths: &[PathBuf]) -> Result<()> {
    if paths.len() == 1 {
        review_single_file(client, config, &paths[0])
    } else {
        review_project(client, config, paths)
    }
}

fn review_single_file(client: &OpenAiClient, config: &Config, path: &Path) -> Result<()> {
    if !path.is_file() {
        eprintln!("Warning: {} not found", path.display());
        return Err(ReviewAgentError::NoReviewableFiles);
    }

    let text = fs::read_to_string(path)?;
    let chunks = chunker::chunk_text(&text, config.model.chunk_tokens);
    let name = file_name(path);

    if config.verbose {
        eprintln!(
            "{}: ~{} tokens, {} part(s)",
            name,
            chunker::estimate_tokens(&text),
            chunks.len()
        );
    }

    println!("=== Review of {} ===", name);

    let mut completed = 0usize;
    for (index, chunk) in chunks.iter().enumerate() {
        let part = index + 1;
        let messages = [
            ChatMessage::system(prompts::SINGLE_FILE_REVIEWER),
            ChatMessage::user(format!("Part {} of {}:\n{}", part, name, chunk)),
        ];

        match client.chat(&messages) {
            Ok(answer) => {
                completed += 1;
                println!("--- Part {} ---\n{}\n", part, answer);
            }
            Err(error @ ReviewAgentError::ApiAuth(_)) => return Err(error),
            Err(error) => {
                eprintln!("Warning: part {} of {} failed: {}", part, name, error);
            }
        }
    }

    if completed == 0 && !chunks.is_empty() {
        return Err(ReviewAgentError::CommandFailed(format!(
            "every part of {} failed to review",
            name
        )));
    }

    Ok(())
}

fn review_project(client: &OpenAiClient, config: &Config, paths: &[PathBuf]) -> Result<()> {
    // 1. Condense each file so the combined pass fits a model window
    let progress = summary_progress(paths.len() as u64, config.verbose);
    let mut file_summaries: Vec<(String, String)> = Vec::new();

    for path in paths {
        if !path.is_file() {
            progress.suspend(|| eprintln!("Warning: {} not found, skipping", path.display()));
            progress.inc(1);
            continue;
        }

        let name = file_name(path);
        progress.set_message(name.clone());

        match summarise_file(client, config, path) {
            Ok(summary) => file_summaries.push((name, summary)),
            Err(error @ ReviewAgentError::ApiAuth(_)) => {
                progress.finish_and_clear();
                return Err(error);
            }
            Err(error) => {
                progress
                    .suspend(|| eprintln!("Warning: failed to summarize {}: {}", name, error));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if file_summaries.is_empty() {
        return Err(ReviewAgentError::NoReviewableFiles);
    }

    // 2. Assemble the project overview from the per-file summaries
    let overview = file_summaries
        .iter()
        .map(|(name, summary)| format!("### {}\n{}", name, summary))
        .collect::<Vec<_>>()
        .join("\n\n");

    // 3. Chunk the overview and run the architectural pass
    let names: Vec<String> = file_summaries.iter().map(|(name, _)| name.clone()).collect();
    let system = prompts::project_reviewer(&names);
    let chunks = chunker::chunk_text(&overview, config.model.chunk_tokens);

    println!("=== Project review ===");

    let mut completed = 0usize;
    for (index, chunk) in chunks.iter().enumerate() {
        let part = index + 1;
        let messages = [
            ChatMessage::system(system.clone()),
            ChatMessage::user(format!("Part {} of the combined overview:\n{}", part, chunk)),
        ];

        match client.chat(&messages) {
            Ok(answer) => {
                completed += 1;
                println!("--- Part {} ---\n{}\n", part, answer);
            }
            Err(error @ ReviewAgentError::ApiAuth(_)) => return Err(error),
            Err(error) => {
                eprintln!("Warning: part {} of the project review failed: {}", part, error);
            }
        }
    }

    if completed == 0 && !chunks.is_empty() {
        return Err(ReviewAgentError::CommandFailed(
            "the project review produced no output".to_string(),
        ));
    }

    Ok(())
}

/// Condense one file into a short bullet-point digest, chunk by chunk
fn summarise_file(client: &OpenAiClient, config: &Config, path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    let chunks = chunker::chunk_text(&text, config.model.chunk_tokens);
    let name = file_name(path);

    let mut summaries = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let part = index + 1;
        let messages = [
            ChatMessage::system(prompts::FILE_SUMMARIZER),
            ChatMessage::user(chunk.clone()),
        ];

        match client.chat(&messages) {
            Ok(summary) => summaries.push(format!("- Part {}: {}", part, summary)),
            Err(error @ ReviewAgentError::ApiAuth(_)) => return Err(error),
            Err(error) => {
                eprintln!("Warning: part {} of {} failed: {}", part, name, error);
            }
        }
    }

    if summaries.is_empty() && !chunks.is_empty() {
        return Err(ReviewAgentError::CommandFailed(format!(
            "every part of {} failed to summarize",
            name
        )));
    }

    Ok(summaries.join("\n"))
}

fn summary_progress(count: u64, verbose: bool) -> ProgressBar {
    if verbose {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(count);
    bar.set_style(
        ProgressStyle::with_template("Summarizing {bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
