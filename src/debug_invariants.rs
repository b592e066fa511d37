use crate::graph_error::GraphError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GraphError>;
}

/// Run [`DebugInvariants::debug_assert_invariants`] on a value when invariant
/// checking is enabled; expands to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($s:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        $crate::DebugInvariants::debug_assert_invariants($s);
    };
}
