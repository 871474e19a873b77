use levelized::core::facility::terms::TermKind;
use std::fmt::Write;

const BAR_GLYPH: char = '█';
const CREDIT_GLYPH: char = '░';

/// Renders cost-term slices as horizontal bars scaled to their share of the total
/// magnitude. Credits (negative terms) are drawn with a lighter glyph.
pub fn render_bars(title: &str, slices: &[(TermKind, f64)], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    let magnitude: f64 = slices.iter().map(|(_, v)| v.abs()).sum();
    if magnitude == 0.0 {
        return out;
    }

    let label_width = slices
        .iter()
        .map(|(kind, _)| kind.label().len())
        .max()
        .unwrap_or(0);

    for (kind, value) in slices {
        let fraction = value.abs() / magnitude;
        let length = (fraction * width as f64).round() as usize;
        let glyph = if *value < 0.0 { CREDIT_GLYPH } else { BAR_GLYPH };
        let bar: String = std::iter::repeat_n(glyph, length.max(1)).collect();
        let _ = writeln!(
            out,
            "{:<label_width$} {:<width$} {:>6.1}%  ({:+.5} $/kWh)",
            kind.label(),
            bar,
            fraction * 100.0,
            value,
        );
    }
    out
}
