mod classes;
mod context;
mod dispatch;
mod docs;
mod enums;
mod modules;

pub(crate) use classes::{ClassBuilder, EntityBuild, class_name, collection_name};
pub(crate) use context::build_context;
pub(crate) use modules::assign_module_names;
