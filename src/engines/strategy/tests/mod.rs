mod common;
mod guardrails;
mod intake;
mod prompts;
