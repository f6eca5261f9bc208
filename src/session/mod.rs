/// Single-screenshot editing session.
pub mod editor;
