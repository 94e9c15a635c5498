pub mod completion;
pub mod moderation;
pub mod prompt;
