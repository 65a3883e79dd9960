// ABOUTME: Template engine module for credtmpl
// ABOUTME: Provides template rendering with the secret lookup helper

pub mod engine;
pub mod error;
pub mod helpers;

pub use engine::{render, TemplateEngine};
pub use error::{InlineError, Result, TemplateError};
