pub(crate) mod bridges;
pub(crate) mod faces;
pub(crate) mod kuratowski;
pub(crate) mod structures;
