mod identifiers;
mod ordering;
