pub mod ask;
pub mod islands;
pub mod render;
pub mod repl;
pub mod show;
