//! Scramble generation.
//!
//! A scramble is 15 face turns in standard cube notation, each face drawn
//! independently from the six sides with an independent modifier (plain,
//! prime, or double). Independence is deliberate: adjacent repeats like
//! `U U'` are legal output.

/// Number of moves in a generated scramble.
pub const SCRAMBLE_MOVES: usize = 15;

const FACES: [&str; 6] = ["U", "D", "L", "R", "F", "B"];
const MODIFIERS: [&str; 3] = ["", "'", "2"];

/// Generates scrambles and remembers the most recent one so it can be
/// recorded alongside the solve it produced.
#[derive(Debug, Default)]
pub struct Scrambler {
    last: Option<String>,
}

impl Scrambler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh scramble and retain it.
    pub fn generate(&mut self) -> String {
        let moves: Vec<String> = (0..SCRAMBLE_MOVES)
            .map(|_| {
                let face = FACES[rand::random::<usize>() % FACES.len()];
                let modifier = MODIFIERS[rand::random::<usize>() % MODIFIERS.len()];
                format!("{}{}", face, modifier)
            })
            .collect();
        let scramble = moves.join(" ");
        self.last = Some(scramble.clone());
        scramble
    }

    /// The most recently generated scramble, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_move(token: &str) -> bool {
        let mut chars = token.chars();
        let face_ok = matches!(chars.next(), Some('U' | 'D' | 'L' | 'R' | 'F' | 'B'));
        let modifier_ok = match chars.next() {
            None => true,
            Some('\'') | Some('2') => chars.next().is_none(),
            Some(_) => false,
        };
        face_ok && modifier_ok
    }

    #[test]
    fn test_scramble_has_fifteen_moves() {
        let mut scrambler = Scrambler::new();
        for _ in 0..50 {
            let scramble = scrambler.generate();
            assert_eq!(scramble.split(' ').count(), SCRAMBLE_MOVES);
        }
    }

    #[test]
    fn test_every_move_is_valid_notation() {
        let mut scrambler = Scrambler::new();
        for _ in 0..50 {
            let scramble = scrambler.generate();
            for token in scramble.split(' ') {
                assert!(is_valid_move(token), "bad move token: {:?}", token);
            }
        }
    }

    #[test]
    fn test_last_retains_the_generated_scramble() {
        let mut scrambler = Scrambler::new();
        assert_eq!(scrambler.last(), None);
        let scramble = scrambler.generate();
        assert_eq!(scrambler.last(), Some(scramble.as_str()));
        let next = scrambler.generate();
        assert_eq!(scrambler.last(), Some(next.as_str()));
    }
}
