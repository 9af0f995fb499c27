//! Interactive provider for human players
//!
//! Reads selections from stdin, listing the hand with indices and values.
//! Bad input is handled here at the boundary with a validate-and-retry
//! loop, so the engine only ever sees well-formed selections.

use crate::core::Hand;
use crate::game::provider::MoveProvider;
use crate::{GameError, Result};
use std::io::{self, BufRead, Write};

/// A provider that prompts a human player for decisions via stdin
pub struct InteractiveProvider;

impl InteractiveProvider {
    pub fn new() -> Self {
        InteractiveProvider
    }

    fn print_hand(hand: &Hand) {
        for (index, card) in hand.iter().enumerate() {
            println!("  [{}] {} (value={})", index, card, card.value());
        }
    }

    /// Read one line from stdin; fails if the input stream is closed
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(GameError::InvalidSelection(
                "input stream closed".to_string(),
            ));
        }
        Ok(line)
    }

    fn prompt(&self) -> Result<String> {
        print!("Your choice: ");
        io::stdout().flush()?;
        self.read_line()
    }
}

impl Default for InteractiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveProvider for InteractiveProvider {
    fn select_reveal(&mut self, hand: &Hand, count: usize) -> Result<Vec<usize>> {
        println!(
            "Choose {} cards to reveal (indices separated by spaces, e.g. \"0 2 5\"):",
            count
        );
        Self::print_hand(hand);

        loop {
            let line = self.prompt()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                eprintln!("Empty input, try again.");
                continue;
            }

            let mut indices = Vec::new();
            let mut valid = true;
            for token in trimmed.split_whitespace() {
                match token.parse::<usize>() {
                    Ok(index) if index < hand.len() => {
                        // Drop duplicates rather than erroring; the count
                        // check below catches a selection that shrank
                        if !indices.contains(&index) {
                            indices.push(index);
                        }
                    }
                    _ => {
                        valid = false;
                        break;
                    }
                }
            }

            if !valid {
                eprintln!(
                    "Invalid input: expected indices 0-{} separated by spaces.",
                    hand.len() - 1
                );
                continue;
            }
            if indices.len() != count {
                eprintln!(
                    "Need exactly {} distinct cards, got {}. Try again.",
                    count,
                    indices.len()
                );
                continue;
            }
            return Ok(indices);
        }
    }

    fn select_play(&mut self, hand: &Hand) -> Result<usize> {
        println!("Choose the card to play:");
        Self::print_hand(hand);

        loop {
            let line = self.prompt()?;
            match line.trim().parse::<usize>() {
                Ok(index) if index < hand.len() => return Ok(index),
                _ => eprintln!("Invalid choice. Enter 0-{}.", hand.len() - 1),
            }
        }
    }
}
