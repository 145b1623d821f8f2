mod common;
mod tests;
