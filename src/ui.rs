//! Rendering helpers shared by the UI drawing code

use ratatui::prelude::*;

/// Render a response body for display, pretty-printing and colorizing it
/// when it parses as JSON. Bodies are kept raw in application state;
/// formatting happens only here.
pub fn render_body(body: &str) -> Vec<Line<'static>> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => {
            let pretty =
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string());
            pretty.lines().map(colorize_json_line).collect()
        }
        Err(_) => body.lines().map(|l| Line::from(l.to_string())).collect(),
    }
}

/// Line-based coloring for pretty-printed JSON: keys cyan, string values
/// green, numbers yellow, literals magenta.
fn colorize_json_line(line: &str) -> Line<'static> {
    // `"key": value` rows; everything else is punctuation or a bare value
    if let Some(p) = line.find("\": ") {
        let key = &line[..=p];
        let value = &line[p + 3..];
        return Line::from(vec![
            Span::styled(key.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(": "),
            value_span(value),
        ]);
    }

    Line::from(vec![value_span(line)])
}

fn value_span(value: &str) -> Span<'static> {
    let trimmed = value.trim().trim_end_matches(',');
    let style = if trimmed.starts_with('"') {
        Style::default().fg(Color::Green)
    } else if matches!(trimmed, "true" | "false" | "null") {
        Style::default().fg(Color::Magenta)
    } else if trimmed.parse::<f64>().is_ok() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Span::styled(value.to_string(), style)
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color (expects display/uppercase form)
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_bodies_are_pretty_printed() {
        let lines = render_body(r#"{"ok":true,"count":2}"#);
        assert!(lines.len() > 1);
    }

    #[test]
    fn non_json_bodies_pass_through_line_by_line() {
        let lines = render_body("plain text\nsecond line");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn status_colors_follow_response_class() {
        assert_eq!(status_color(201), Color::Green);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(status_color(500), Color::Magenta);
    }
}
