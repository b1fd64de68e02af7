pub mod poem;

pub use poem::{checked_poem, countdown_lines, iterative_poem, recursion_poem, write_poem};
