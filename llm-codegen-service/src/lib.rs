//! LLM app-code generation service for the App Builder backend.
//!
//! The crate implements the generation request pipeline:
//!
//! 1. [`spec::normalize`] — turns a loosely-typed specification payload into
//!    a fully-defaulted [`spec::AppSpec`], rejecting non-object input.
//! 2. [`prompt::build_prompt`] — deterministically derives the system/user
//!    prompt pair from the normalized spec.
//! 3. [`services::open_ai_service::OpenAiCodegenService`] — performs exactly
//!    one non-streaming chat completion call against the OpenAI API.
//! 4. [`response::completion_text`] — validates the returned payload shape
//!    and extracts the generated code.
//!
//! [`pipeline::generate_app_code`] sequences the stages and is the single
//! entry point used by the HTTP layer. Every failure is normalized into the
//! closed [`error_handler::CodegenError`] taxonomy; no raw provider error
//! text crosses the crate boundary.

pub mod config;
pub mod error_handler;
pub mod pipeline;
pub mod prompt;
pub mod response;
pub mod services;
pub mod spec;
