/// Lifecycle phase of the invoice form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fields are editable.
    #[default]
    Editing,
    /// The generated invoice is on display.
    Reviewing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Editing => f.write_str("editing"),
            Phase::Reviewing => f.write_str("reviewing"),
        }
    }
}
