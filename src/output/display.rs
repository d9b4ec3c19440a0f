//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{SolutionsResult, SurveyStatistics};
use colored::Colorize;

/// Print every word playable from a root, grouped by length
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No playable words in the dictionary.".red());
        return;
    }

    println!(
        "\n📖 {} playable words, best possible score {}",
        result.words.len().to_string().bright_yellow().bold(),
        result.max_score.to_string().green().bold()
    );

    let mut current_length = None;
    for word in &result.words {
        let length = word.chars().count();
        if current_length != Some(length) {
            current_length = Some(length);
            print!("\n  {} ", length_badge(length).bright_cyan());
        }
        print!("{word} ");
    }
    println!("\n");
}

/// Print the outcome of surveying every root word
pub fn print_survey(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.total_roots);
    println!(
        "   Average solutions: {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:        {:.2}s", stats.duration.as_secs_f64());

    if let Some(richest) = &stats.richest {
        println!(
            "\n🏆 {} {} ({} words, max score {})",
            "Richest root:".bright_cyan().bold(),
            richest.root.to_uppercase().green().bold(),
            richest.solutions,
            richest.max_score
        );
    }

    let most = stats.richest.as_ref().map_or(0, |r| r.solutions);
    if !stats.poorest.is_empty() {
        println!("\n📉 {}", "Poorest roots:".bright_cyan().bold());
        for summary in &stats.poorest {
            let bar = create_progress_bar(summary.solutions as f64, most as f64, 30);
            println!(
                "   {:<12} {} {:4}",
                summary.root,
                bar.yellow(),
                summary.solutions
            );
        }
    }

    if stats.dead_roots.is_empty() {
        println!("\n{}", "✅ Every root has at least one playable word".green());
    } else {
        println!(
            "\n{} {}",
            "⚠ Roots with no playable word:".red().bold(),
            stats.dead_roots.join(", ")
        );
    }
    println!();
}
