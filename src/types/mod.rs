pub mod span;
pub mod template;
