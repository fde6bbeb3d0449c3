pub(crate) mod identifiers;
pub(crate) mod name_index;
pub(crate) mod ordering;
pub(crate) mod reserved;

#[cfg(test)]
mod tests;
