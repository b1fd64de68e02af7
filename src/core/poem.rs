use crate::utils::error::{PoemError, Result};
use std::io::Write;

/// Closing line printed once the countdown reaches the terminal case.
pub const TERMINATOR: &str = "That's all folks!";

/// Depth the binary renders.
pub const DEFAULT_DEPTH: i64 = 5;

/// Largest depth accepted by [`checked_poem`].
pub const MAX_DEPTH: i64 = 1_000;

/// Builds the countdown for depth `n`, one line per level, ending in [`TERMINATOR`].
///
/// Any `n <= 0` is the terminal case. The result has no trailing newline.
pub fn recursion_poem(n: i64) -> String {
    if n <= 0 {
        return TERMINATOR.to_string();
    }

    format!("This is line {}\n", n) + &recursion_poem(n - 1)
}

/// The countdown lines for depth `n`, highest first, without the terminator.
pub fn countdown_lines(n: i64) -> impl Iterator<Item = String> {
    (1..=n.max(0)).rev().map(|k| format!("This is line {}", k))
}

/// Same output as [`recursion_poem`], built with a loop instead of the call stack.
pub fn iterative_poem(n: i64) -> String {
    let mut poem = String::new();
    for line in countdown_lines(n) {
        poem.push_str(&line);
        poem.push('\n');
    }
    poem.push_str(TERMINATOR);
    poem
}

/// [`recursion_poem`] with the depth capped at [`MAX_DEPTH`].
pub fn checked_poem(n: i64) -> Result<String> {
    if n > MAX_DEPTH {
        return Err(PoemError::DepthExceeded {
            depth: n,
            max: MAX_DEPTH,
        });
    }

    tracing::debug!("Rendering poem at depth {}", n);
    Ok(recursion_poem(n))
}

/// Writes the checked poem for depth `n` to `out`, followed by a single newline.
pub fn write_poem<W: Write>(out: &mut W, n: i64) -> Result<()> {
    let poem = checked_poem(n)?;
    writeln!(out, "{}", poem)?;
    out.flush()?;

    tracing::debug!("Printed {} lines", poem.lines().count());
    Ok(())
}
