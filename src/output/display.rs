//! Display functions for end-of-game results

use super::formatters::{colored_row, create_progress_bar, share_grid};
use crate::game::{GameSession, Statistics};
use colored::Colorize;

/// Print the finished board and the share grid
pub fn print_game_summary(session: &GameSession) {
    println!("\n{}", "─".repeat(40).cyan());
    for entry in session.history() {
        println!("  {}", colored_row(entry.word.text(), &entry.evaluation));
    }
    println!("{}", "─".repeat(40).cyan());
    println!("\n{}\n", share_grid(session));
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:         {}", stats.total_games);
    println!(
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak: {}", stats.current_streak);
    println!("   Max streak:     {}", stats.max_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, most, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
