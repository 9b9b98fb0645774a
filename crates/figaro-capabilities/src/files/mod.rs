//! File delivery capabilities.

pub mod slack;

pub use slack::SendFilesToSlackCapability;
