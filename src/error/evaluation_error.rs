#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parse tree.
pub enum EvaluationError {
    /// A variable was reached that is neither bound nor set.
    UndefinedVariable {
        /// The symbol of the variable.
        name: String,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable {name} does not have a defined value")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
