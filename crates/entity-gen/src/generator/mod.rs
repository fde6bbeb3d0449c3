pub(crate) mod ast;
pub mod codegen;
pub(crate) mod converter;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
