pub(crate) mod common;
mod generation;
