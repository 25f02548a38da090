use credence::{AnalysisVerbose, Verdict};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
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

pub fn print_run(input: &str, res: &AnalysisVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let preview: String = input.chars().take(80).collect();
    println!("\n{}", palette.bold(palette.paint(format!("⚖  Analyzing: \"{}\"", preview), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Signals ━━━", ansi::GRAY));
    print_signals(res, &palette);

    println!("\n{}", palette.paint("━━━ Score ━━━", ansi::GRAY));
    print_breakdown(res, &palette);

    let verdict = res.analysis.verdict;
    println!(
        "\n  {} {}  {}",
        palette.bold(format!("{:.2}", res.analysis.credibility_score)),
        palette.bold(palette.paint(verdict.as_str(), verdict_color(verdict))),
        palette.dim(format!("({:?})", res.details.elapsed)),
    );
    println!();
}

fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::LikelyReal => ansi::GREEN,
        Verdict::Uncertain => ansi::YELLOW,
        Verdict::LikelyFake => ansi::RED,
    }
}

fn print_signals(res: &AnalysisVerbose, palette: &ansi::Palette) {
    let s = &res.analysis.signals;
    // (name, rendered value) rows, in schema order.
    let rows: Vec<(&str, String)> = vec![
        ("length", s.length.to_string()),
        ("all_caps_ratio", format!("{:.3}", s.all_caps_ratio)),
        ("exclamation_count", s.exclamation_count.to_string()),
        ("question_count", s.question_count.to_string()),
        ("url_count", s.url_count.to_string()),
        ("emotional_words", s.emotional_words.to_string()),
        ("sensational_words", s.sensational_words.to_string()),
        ("credible_words", s.credible_words.to_string()),
        ("trusted_domain_count", s.trusted_domain_count.to_string()),
        ("has_citations", s.has_citations.to_string()),
        ("neutral_tone", s.neutral_tone.to_string()),
    ];

    for (name, value) in rows {
        println!("  {} {}", palette.dim(format!("{:<22}", format!("{name}:"))), palette.paint(value, ansi::CYAN));
    }
}

fn print_breakdown(res: &AnalysisVerbose, palette: &ansi::Palette) {
    let breakdown = &res.details.breakdown;

    println!("  {} {:+.2}", palette.dim(format!("{:<22}", "baseline:")), breakdown.baseline);

    if breakdown.adjustments.is_empty() {
        println!("  {}", palette.dim("no adjustments fired"));
    }
    for adj in &breakdown.adjustments {
        let color = if adj.delta < 0.0 { ansi::RED } else { ansi::GREEN };
        println!(
            "  {} {}",
            palette.dim(format!("{:<22}", format!("{}:", adj.signal))),
            palette.paint(format!("{:+.2}", adj.delta), color)
        );
    }

    let clamped = breakdown.raw != breakdown.score;
    println!(
        "  {} {}{}",
        palette.dim(format!("{:<22}", "sum:")),
        palette.bold(format!("{:+.2}", breakdown.raw)),
        if clamped { palette.dim(format!("  (clamped to {:.2})", breakdown.score)) } else { String::new() },
    );
}
