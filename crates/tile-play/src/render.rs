use std::io::{self, Write};

use tile_engine::session::{Session, SessionSummary};

pub const HELP: &str = "w/a/s/d: move  r: replay  q: quit";

/// Draw the score line, optional key help and the grid.
pub fn draw<W: Write>(out: &mut W, session: &Session, show_help: bool) -> io::Result<()> {
    writeln!(out, "SCORE: {}", session.score())?;
    if show_help {
        writeln!(out, "{}", HELP)?;
    }
    write!(out, "{}", session.grid())?;
    writeln!(out)
}

pub fn summary_text<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    if summary.game_over {
        writeln!(out, "over: {}", summary.score)?;
    }
    writeln!(
        out,
        "score={} moves={} highest_tile={} seed={}",
        summary.score, summary.moves, summary.highest_tile, summary.seed
    )
}

pub fn summary_json<W: Write>(out: &mut W, summary: &SessionSummary) -> io::Result<()> {
    serde_json::to_writer(&mut *out, summary)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_engine::engine::Grid;
    use tile_engine::session::SessionConfig;

    #[test]
    fn draw_includes_score_help_and_grid() {
        let s = Session::new(SessionConfig {
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        let mut buf = Vec::new();
        draw(&mut buf, &s, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("SCORE: 0"));
        assert_eq!(lines.next(), Some(HELP));
        assert!(text.contains(&s.grid().to_string()));

        let mut quiet = Vec::new();
        draw(&mut quiet, &s, false).unwrap();
        assert!(!String::from_utf8(quiet).unwrap().contains(HELP));
    }

    #[test]
    fn summary_formats() {
        let summary = SessionSummary {
            score: 10,
            moves: 5,
            highest_tile: 16,
            seed: 3,
            game_over: true,
            grid: Grid::from_rows(vec![vec![16, 2], vec![4, 8]]).unwrap(),
        };
        let mut text = Vec::new();
        summary_text(&mut text, &summary).unwrap();
        assert_eq!(
            String::from_utf8(text).unwrap(),
            "over: 10\nscore=10 moves=5 highest_tile=16 seed=3\n"
        );

        let mut json = Vec::new();
        summary_json(&mut json, &summary).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(v["score"], 10);
        assert_eq!(v["highest_tile"], 16);
        assert_eq!(v["game_over"], true);
        assert_eq!(v["grid"]["size"], 2);
        assert_eq!(v["grid"]["cells"], serde_json::json!([[16, 2], [4, 8]]));
    }
}
