//! Coordinate-string transforms for engine-produced markup.
//!
//! Graphviz emits point lists (`"27,-18 -27,-18 …"`) and path data
//! (`"M54.4,-18C81.39,-18 …"`) whose numeric payload is `x,y` pairs. The
//! translate helpers offset those pairs while preserving the surrounding
//! token grammar byte-for-byte: command letters, separators and any token
//! that is not a coordinate pair pass through untouched.

/// Rounds to four decimal places, the precision used for every coordinate
/// written back into markup. Keeps repeated drag updates from accumulating
/// floating-point noise in the serialized document.
pub fn round_to_4_decimals(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

/// Formats a coordinate the way an engine (or a JS host) would print it:
/// shortest round-trippable decimal, `100` rather than `100.0`, and never
/// `-0` or a non-finite value.
pub fn fmt_coord(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

fn translate_pair(token: &str, dx: f64, dy: f64) -> Option<String> {
    let (x, y) = token.split_once(',')?;
    let x: f64 = x.parse().ok()?;
    let y: f64 = y.parse().ok()?;
    Some(format!(
        "{},{}",
        fmt_coord(round_to_4_decimals(x + dx)),
        fmt_coord(round_to_4_decimals(y + dy))
    ))
}

/// Translates every `x,y` pair of a `points` attribute by `(dx, dy)`.
pub fn translate_points_attribute(points: &str, dx: f64, dy: f64) -> String {
    points
        .split(' ')
        .map(|token| translate_pair(token, dx, dy).unwrap_or_else(|| token.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translates every coordinate pair of a path `d` attribute by `(dx, dy)`,
/// leaving the command structure exactly as found. Only uppercase command
/// letters are treated as boundaries — Graphviz emits absolute commands
/// exclusively.
pub fn translate_d_attribute(d: &str, dx: f64, dy: f64) -> String {
    let mut out = String::with_capacity(d.len());
    let mut token = String::new();
    for ch in d.chars() {
        if ch.is_ascii_uppercase() || ch == ' ' {
            flush_token(&mut token, dx, dy, &mut out);
            out.push(ch);
        } else {
            token.push(ch);
        }
    }
    flush_token(&mut token, dx, dy, &mut out);
    out
}

fn flush_token(token: &mut String, dx: f64, dy: f64, out: &mut String) {
    if token.is_empty() {
        return;
    }
    match translate_pair(token, dx, dy) {
        Some(translated) => out.push_str(&translated),
        None => out.push_str(token),
    }
    token.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(round_to_4_decimals(1.0), 1.0);
        assert_eq!(round_to_4_decimals(-8.06 + 5.0), -3.06);
        assert_eq!(round_to_4_decimals(0.000049), 0.0);
    }

    #[test]
    fn formats_coordinates_like_an_engine() {
        assert_eq!(fmt_coord(100.0), "100");
        assert_eq!(fmt_coord(-18.0), "-18");
        assert_eq!(fmt_coord(27.5), "27.5");
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(f64::NAN), "0");
    }

    #[test]
    fn non_pair_tokens_pass_through() {
        assert_eq!(translate_points_attribute("foo 1,2", 10.0, 5.0), "foo 11,7");
        assert_eq!(translate_points_attribute("", 10.0, 5.0), "");
    }
}
