use cipherlab_core::brute_force::BruteForceResult;
use cipherlab_core::frequency::FrequencyTable;
use cipherlab_core::lab::AnalysisResult;
use std::fmt::Write;

/// Width of a 100% bar, in characters.
const BAR_WIDTH: usize = 40;

/// Renders an analysis result for the terminal.
pub(crate) fn analysis(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Frequency(table) => frequency_chart(table),
        AnalysisResult::BruteForce(candidates) => brute_force_list(candidates),
    }
}

fn frequency_chart(table: &FrequencyTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Letter Frequency ({} letters)", table.total());
    let _ = writeln!(out, "{:-<60}", "");
    for f in table.ranked() {
        let _ = writeln!(
            out,
            "{}  {:<width$}  {:>6.2}%  {}x",
            f.letter,
            "#".repeat(bar_len(f.proportion)),
            f.percentage(),
            f.count,
            width = BAR_WIDTH
        );
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar_len(proportion: f64) -> usize {
    // Any letter that occurs gets at least one mark.
    ((proportion * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH)
}

fn brute_force_list(result: &BruteForceResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Caesar Brute-Force ({} keys)", result.candidates().len());
    let _ = writeln!(out, "{:-<60}", "");
    for c in result.candidates() {
        let _ = writeln!(out, "[Key {:02}] {}", c.shift, c.text);
    }
    out
}
