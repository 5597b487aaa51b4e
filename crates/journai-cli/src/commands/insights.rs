//! Insights command implementation

use anyhow::Result;
use journai_core::db::Database;
use journai_core::insights::{InsightResult, InsightsEngine, TimeRange};

/// Width of the longest bar in the mood and weekday charts
const BAR_WIDTH: u32 = 30;

fn bar(value: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH).div_ceil(max);
    "█".repeat(len as usize)
}

pub fn cmd_insights(
    db: &Database,
    user: &str,
    range: &str,
    mood: Option<&str>,
    json: bool,
) -> Result<()> {
    if range.parse::<TimeRange>().is_err() {
        tracing::warn!("Unknown range '{}', showing the last month", range);
    }
    let range = TimeRange::parse_or_default(Some(range));
    let insights = InsightsEngine::new(db).compute(user, range, mood)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    print_insights(user, range, mood, &insights);
    Ok(())
}

fn print_insights(user: &str, range: TimeRange, mood: Option<&str>, insights: &InsightResult) {
    println!();
    match mood {
        Some(m) => println!("📔 Insights for {} (last {}, mood: {})", user, range, m),
        None => println!("📔 Insights for {} (last {})", user, range),
    }
    println!("   ─────────────────────────────────────────────");

    if insights.total_entries == 0 {
        println!("   No journal entries in this period.");
        return;
    }

    println!("   Entries:            {}", insights.total_entries);
    println!("   Avg words/entry:    {}", insights.average_words_per_entry);
    println!("   🔥 Current streak:  {} day(s)", insights.current_streak);
    println!("   🏆 Longest streak:  {} day(s)", insights.longest_streak);

    println!();
    println!("   Mood distribution");
    let max = insights
        .mood_distribution
        .iter()
        .map(|m| m.count)
        .max()
        .unwrap_or(0);
    for m in &insights.mood_distribution {
        println!(
            "   {:<11} {:>4} {:>4}% {}",
            m.mood.as_str(),
            m.count,
            m.percentage,
            bar(m.count, max)
        );
    }

    println!();
    println!("   Weekly activity");
    let max = insights
        .weekly_activity
        .iter()
        .map(|d| d.entries)
        .max()
        .unwrap_or(0);
    for day in &insights.weekly_activity {
        println!("   {:<4} {:>4} {}", day.day, day.entries, bar(day.entries, max));
    }

    if let (Some(first), Some(last)) = (
        insights.word_count_trend.first(),
        insights.word_count_trend.last(),
    ) {
        let words: u32 = insights.word_count_trend.iter().map(|p| p.word_count).sum();
        println!();
        println!(
            "   Words written {} to {}: {} across {} day(s)",
            first.date,
            last.date,
            words,
            insights.word_count_trend.len()
        );
    }
}
