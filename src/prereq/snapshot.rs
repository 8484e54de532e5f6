//! Read-only view of a character's stats for prerequisite evaluation

/// Anything that can answer the evaluator's stat questions.
///
/// All lookups are total: unknown names return `None` and evaluate false at
/// the call site rather than erroring.
pub trait StatSnapshot {
    /// Numeric attribute by name, `None` when the attribute does not exist
    fn attribute(&self, name: &str) -> Option<i32>;

    /// Current skill rank by name (alias-resolved), `None` when the name
    /// resolves to no known skill
    fn skill_rank(&self, name: &str) -> Option<i32>;

    /// Character level
    fn level(&self) -> u32;

    /// Whether the First Ideal has been spoken
    fn ideal_spoken(&self) -> bool;
}
