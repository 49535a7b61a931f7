use soundlaw::{NormalizeOutcome, VowelChangeRecord};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the full report for one notation: atomic rules, diagnostics, and the
/// vowel-change records of each rule (`records[i]` belongs to `rules[i]`).
pub fn print_notation(input: &str, outcome: &NormalizeOutcome, records: &[Vec<VowelChangeRecord>], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Notation: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Atomic rules ━━━", ansi::GRAY));
    if outcome.rules.is_empty() {
        println!("{}", palette.dim("  No rules produced"));
    }
    for (index, rule) in outcome.rules.iter().enumerate() {
        println!(
            "  {} {} {}",
            palette.paint(format!("[{}]", index), ansi::GRAY),
            palette.bold(palette.paint(rule.chain(), ansi::GREEN)),
            if rule.environment.is_empty() {
                palette.dim("(no environment)")
            } else {
                palette.paint(format!("/ {}", rule.environment), ansi::YELLOW)
            },
        );
    }

    if !outcome.diagnostics.is_empty() {
        println!("\n{}", palette.paint("━━━ Diagnostics ━━━", ansi::GRAY));
        for diagnostic in &outcome.diagnostics {
            println!("  {} {}", palette.paint("⚠", ansi::YELLOW), diagnostic);
        }
    }

    println!("\n{}", palette.paint("━━━ Vowel changes ━━━", ansi::GRAY));
    let mut any = false;
    for (index, rule_records) in records.iter().enumerate() {
        for record in rule_records {
            any = true;
            println!(
                "  {} {}",
                palette.paint(format!("[{}]", index), ansi::GRAY),
                palette.bold(palette.paint(fmt_record(record), ansi::GREEN)),
            );
            println!(
                "      {} {}",
                palette.dim("vowel:"),
                palette.paint(record.from_vowel.summary(), ansi::BLUE),
            );
            if let Some(before) = &record.before {
                println!("      {} {}", palette.dim("before:"), palette.paint(before.summary(), ansi::CYAN));
            }
            if let Some(after) = &record.after {
                println!("      {} {}", palette.dim("after:"), palette.paint(after.summary(), ansi::CYAN));
            }
        }
    }
    if !any {
        println!("{}", palette.dim("  No single-vowel change identified"));
    }
    println!();
}

fn fmt_record(record: &VowelChangeRecord) -> String {
    let side = |segment: &Option<soundlaw::Segment>| match segment {
        Some(segment) => segment.text.clone(),
        None => "·".to_string(),
    };
    format!(
        "{} → {} / {}_{}",
        record.from_vowel.text,
        record.to_vowel.as_ref().map(|s| s.text.clone()).unwrap_or_else(|| "∅".to_string()),
        side(&record.before),
        side(&record.after),
    )
}
