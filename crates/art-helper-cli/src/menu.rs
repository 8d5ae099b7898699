//! Interactive medium selection.

use std::io::{self, BufRead, Write};

use art_helper_core::medium::Medium;

/// Print the menu and read lines until one names a medium.
///
/// Accepts a 1-based menu number or a case-insensitive medium name.  Blank
/// input re-prompts silently; anything else invalid prints a hint and asks
/// again.  Reaching end of input before a valid choice is a read error.
pub fn choose_medium(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Medium> {
    writeln!(output, "Choose an art medium:")?;
    for (i, medium) in Medium::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, medium)?;
    }

    loop {
        write!(output, "Enter number (or name): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a medium was chosen",
            ));
        }

        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        if let Ok(index) = choice.parse::<usize>() {
            if let Some(medium) = Medium::from_index(index) {
                return Ok(medium);
            }
        } else if let Ok(medium) = choice.parse::<Medium>() {
            return Ok(medium);
        }

        writeln!(output, "Invalid choice — try again.")?;
    }
}
