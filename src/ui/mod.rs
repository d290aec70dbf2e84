pub mod components;
pub mod content;
pub mod pages;
pub mod shell;
pub mod theme;
