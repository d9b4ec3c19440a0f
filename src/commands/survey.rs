//! Root word survey
//!
//! Counts the playable words of every root in a list, to spot roots that make
//! for a poor (or impossible) game.

use super::solutions::{find_solutions, max_score};
use crate::dictionary::WordSetDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of poorest roots kept in the statistics
const POOREST_SHOWN: usize = 5;

/// Solution count for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub max_score: usize,
}

/// Aggregate results of a survey
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_solutions: f64,
    pub richest: Option<RootSummary>,
    /// Fewest solutions first
    pub poorest: Vec<RootSummary>,
    /// Roots no word can be played from
    pub dead_roots: Vec<String>,
    pub duration: Duration,
}

/// Summarize every root in `roots` against `lexicon`
///
/// `pb` is advanced once per root.
pub fn survey_roots(roots: &[&str], lexicon: &[&str], pb: &ProgressBar) -> Vec<RootSummary> {
    roots
        .par_iter()
        .map(|&root| {
            let words = find_solutions(root, lexicon);
            pb.inc(1);
            RootSummary {
                root: root.to_string(),
                solutions: words.len(),
                max_score: max_score(&words),
            }
        })
        .collect()
}

/// Aggregate per-root summaries
#[must_use]
pub fn summarize(mut summaries: Vec<RootSummary>, duration: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let total_solutions: usize = summaries.iter().map(|s| s.solutions).sum();
    let average_solutions = if total_roots == 0 {
        0.0
    } else {
        total_solutions as f64 / total_roots as f64
    };

    summaries.sort_by(|a, b| a.solutions.cmp(&b.solutions).then_with(|| a.root.cmp(&b.root)));

    let dead_roots = summaries
        .iter()
        .filter(|s| s.solutions == 0)
        .map(|s| s.root.clone())
        .collect();
    let richest = summaries
        .iter()
        .max_by(|a, b| a.solutions.cmp(&b.solutions).then_with(|| b.root.cmp(&a.root)))
        .cloned();
    let poorest = summaries.into_iter().take(POOREST_SHOWN).collect();

    SurveyStatistics {
        total_roots,
        average_solutions,
        richest,
        poorest,
        dead_roots,
        duration,
    }
}

/// Survey `roots` (or the first `limit` of them) against the dictionary
pub fn run_survey(
    roots: &[String],
    dictionary: &WordSetDictionary,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&str> = roots
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .map(String::as_str)
        .collect();
    let lexicon: Vec<&str> = dictionary.words().collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let summaries = survey_roots(&roots, &lexicon, &pb);
    pb.finish_and_clear();

    summarize(summaries, start.elapsed())
}
