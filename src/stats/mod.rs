//! Stats domain: stat schema and additive aggregation.

mod kinds;
#[cfg(test)]
mod tests;
mod totals;

pub use kinds::StatKind;
pub use totals::StatTotals;
