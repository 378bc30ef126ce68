pub mod assets;
pub mod filesystem;
pub mod terminal;
