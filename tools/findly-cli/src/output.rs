//! Output formatting for the CLI.

use console::{style, Term};
use findly_search::{Badges, ProductCard};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one product card.
    pub fn card(&self, index: usize, card: &ProductCard) {
        if self.json {
            return;
        }

        let title = truncate(&card.title, self.term_width().saturating_sub(8).max(20));
        println!("\n{} {}", style(format!("{:>2}.", index)).dim(), style(title).bold());

        if card.shows_discount() {
            println!(
                "    {} {} {}",
                style(card.pricing.final_price.display()).green().bold(),
                style(card.pricing.original_price.display()).dim().strikethrough(),
                style(card.coupon_label.as_deref().unwrap_or_default()).cyan(),
            );
        } else {
            println!("    {}", style(card.price().display()).bold());
        }

        if let Some(coupon) = &card.pricing.chosen_coupon {
            self.kv("  coupon", &coupon.code);
        }
        if let Some(source) = &card.source {
            self.kv("  store", source);
        }
        if card.over_budget {
            println!("    {}", style("over budget").red());
        }
        println!("    {}", badge_line(&card.badges));
        if let Some(link) = &card.link {
            println!("    {}", style(link).dim().underlined());
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Colored badge keys for one card, in card order.
pub fn badge_line(badges: &Badges) -> String {
    badges
        .keys()
        .into_iter()
        .map(badge_style)
        .collect::<Vec<_>>()
        .join(" ")
}

fn badge_style(key: &str) -> String {
    match key {
        "verdict_buy_now" => style(key).green().bold().to_string(),
        "price_excellent" | "trust_safe" | "behavior_suitable" => style(key).green().to_string(),
        "price_good" | "timing_wait" | "timing_may_rise" | "verdict_wait"
        | "verdict_wait_price_drop" => style(key).yellow().to_string(),
        "trust_risk" | "verdict_overpriced" => style(key).red().to_string(),
        _ => style(key).dim().to_string(),
    }
}

/// Cut a string to `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use findly_search::{BadgePolicy, Intelligence};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 6), "a lon…");
        assert_eq!(truncate("سماعات لاسلكية", 7), "سماعات…");
    }

    #[test]
    fn test_badge_line_follows_card_order() {
        console::set_colors_enabled(false);
        let badges = BadgePolicy::default().evaluate(&Intelligence::default());
        assert_eq!(
            badge_line(&badges),
            "price_weak timing_stable trust_safe behavior_general"
        );
    }
}
