use tile_engine::engine::Direction;

/// A decoded player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Quit,
    Unknown,
}

/// Decode one input line. Accepts WASD, vi keys and spelled-out words,
/// case-insensitively; surrounding whitespace is ignored.
pub fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Command::Move(Direction::Up),
        "s" | "j" | "down" => Command::Move(Direction::Down),
        "a" | "h" | "left" => Command::Move(Direction::Left),
        "d" | "l" | "right" => Command::Move(Direction::Right),
        "r" | "reset" | "replay" => Command::Reset,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}
