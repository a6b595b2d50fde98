/// Widening fallback shared by every degrade point in the engine:
/// when a step loses its specific result, warn and continue with a
/// broader one instead of aborting.
pub trait OrWiden<T> {
    /// Return the value, or warn with `context` and substitute `fallback`
    fn or_widen(self, context: &str, fallback: impl FnOnce() -> T) -> T;
}

impl<T> OrWiden<T> for Option<T> {
    fn or_widen(self, context: &str, fallback: impl FnOnce() -> T) -> T {
        match self {
            Some(value) => value,
            None => {
                eprintln!("Warning: {context}");
                fallback()
            }
        }
    }
}

/// Adapter for widening on empty collections
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
