//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Board;

/// ANSI sequence that homes the cursor and clears the screen
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Format boards for terminal output
pub struct BoardFormatter;

impl BoardFormatter {
    /// Render one frame, each glyph followed by two spaces
    pub fn format_board(board: &Board, display: &DisplayConfig) -> String {
        let mut output = String::new();
        for row in board.rows() {
            for &cell in row {
                output.push_str(if cell { &display.live_glyph } else { &display.dead_glyph });
                output.push_str("  ");
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with coordinates
    pub fn format_board_with_coords(board: &Board) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..board.size() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (row, cells) in board.rows().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for &cell in cells {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Size and population summary
    pub fn format_statistics(board: &Board) -> String {
        let total = board.size() * board.size();
        format!(
            "Board Statistics:\n  Size: {0}x{0}\n  Living cells: {1}\n  Density: {2:.1}%\n",
            board.size(),
            board.living_count(),
            (board.living_count() as f64 / total as f64) * 100.0
        )
    }
}

/// Colored terminal output
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(&self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn sample_board() -> Board {
        Board::from_cells(vec![vec![true, false], vec![false, true]]).unwrap()
    }

    #[test]
    fn test_format_board() {
        let settings = Settings::default();
        let output = BoardFormatter::format_board(&sample_board(), &settings.display);
        assert_eq!(output, "▣  .  \n.  ▣  \n");
    }

    #[test]
    fn test_format_board_custom_glyphs() {
        let mut settings = Settings::default();
        settings.display.live_glyph = "#".to_string();
        settings.display.dead_glyph = "-".to_string();
        let output = BoardFormatter::format_board(&sample_board(), &settings.display);
        assert_eq!(output, "#  -  \n-  #  \n");
    }

    #[test]
    fn test_format_with_coords() {
        let output = BoardFormatter::format_board_with_coords(&sample_board());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["    0 1", " 0 ██··", " 1 ··██"]);
    }

    #[test]
    fn test_statistics() {
        let output = BoardFormatter::format_statistics(&sample_board());
        assert!(output.contains("Size: 2x2"));
        assert!(output.contains("Living cells: 2"));
        assert!(output.contains("Density: 50.0%"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        for (text, formatted) in [
            ("OK", ColorOutput::success("OK")),
            ("careful", ColorOutput::warning("careful")),
            ("broken", ColorOutput::error("broken")),
            ("note", ColorOutput::info("note")),
        ] {
            assert!(formatted.contains(text));
        }
    }
}
