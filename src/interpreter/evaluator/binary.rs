/// Dispatch from operator to handler.
pub mod core;

/// Arithmetic on coerced numbers: integer, real and complex rules.
pub mod arithmetic;

/// Ordering, loose and exact equality, and `=` assertions.
pub mod comparison;

/// Vector indexing and the dot product.
pub mod vector;
