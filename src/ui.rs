use coryn::{MatchResult, Score};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
const MISSING: &str = "N/A";

/// Query forms accepted by `search` and `browse`, with an example of each.
const QUERY_FORMS: &[(&str, &str, &str)] = &[
    ("<name>", "dragon bow", "fuzzy match on item names"),
    ("all [type]", "all 1h", "every item, or every item of a weapon type"),
    ("stat:<name>", "stat: cr", "items ranked by a stat value"),
];

pub fn print_banner() {
    println!();
    println!(
        "   {}  {}",
        "CORYN".red().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("   {}", "Item Browser".white());
    let forms: Vec<&str> = QUERY_FORMS.iter().map(|(form, _, _)| *form).collect();
    println!("   {}", forms.join("  |  ").dimmed());
    println!();
}

pub fn print_query_help() {
    println!("{}", "QUERY SYNTAX".bold().underline());
    for (form, example, what) in QUERY_FORMS {
        println!(
            "   {:<12} {:<28} {}",
            form.cyan(),
            what,
            format!("e.g. {}", example).dimmed()
        );
    }
    println!();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn log_error(msg: &str) {
    eprintln!("{} {}", "✖ Error:".red().bold(), msg);
}

pub fn log_success(msg: &str) {
    println!("{} {}", "✔ Success:".green().bold(), msg);
}

fn field(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

pub fn print_results(results: &[MatchResult<'_>]) {
    if results.is_empty() {
        println!("{}", "No matches found".yellow());
        println!();
        return;
    }

    for result in results {
        let item = result.item;
        let score = match result.score {
            Some(Score::Match(v)) => format!(" (match {:.0})", v),
            Some(Score::Stat(v)) => format!(" (value {})", v),
            None => String::new(),
        };
        println!(
            "{} [{}]{}",
            item.name().green().bold(),
            item.kind.trim().cyan(),
            score.dimmed()
        );
        println!("   Stats:    {}", field(item.stats.as_deref()));
        println!("   Sell:     {}", field(item.sell.as_deref()));
        println!("   Process:  {}", field(item.process.as_deref()));
        println!(
            "   Obtained: {} @ {}",
            field(item.obtained_monster.as_deref()),
            field(item.obtained_map.as_deref())
        );
        let images = if item.image_paths.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            item.image_paths.join(", ")
        };
        println!("   Images:   {}", images.dimmed());
    }
    println!();
}

pub fn print_stat_names(names: &[&str]) {
    if names.is_empty() {
        println!("{}", "No stats found".yellow());
        return;
    }
    println!("{}", "AVAILABLE STATS".bold().underline());
    for name in names {
        println!("   {}", name);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use coryn::{classify, QueryMode};

    #[test]
    fn test_query_form_examples_select_their_mode() {
        let modes: Vec<QueryMode> = QUERY_FORMS.iter().map(|(_, ex, _)| classify(ex)).collect();
        assert!(matches!(modes[0], QueryMode::Name(_)));
        assert_eq!(modes[1], QueryMode::Category(Some("1 handed sword".into())));
        assert_eq!(modes[2], QueryMode::Stat("critical rate".into()));
    }
}
