/// What a matching rule does with an entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleAction {
    /// Keep the entry.
    Include,
    /// Drop the entry and, for subfolders, everything beneath it.
    Exclude,
}
