//! Render-state model for data-backed views.

/// What a data-backed view is currently showing.
///
/// One variant per state; views match on this exhaustively instead of
/// testing nullable combinations. `Failed` carries a display message only:
/// the view isolates its own error state and nothing here is fatal to the
/// application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// The initial fetch has not resolved yet.
    Loading,
    /// The fetch failed; the message is surfaced inline.
    Failed(String),
    /// The fetch succeeded with no items.
    Empty,
    /// The fetch succeeded with content.
    Ready(T),
}

impl<T> ViewState<Vec<T>> {
    /// Collapse a fetched list into its render state.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Ready(items)
        }
    }

    /// Collapse a fetch result into its render state.
    pub fn from_result<E: core::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::from_items(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_the_empty_state() {
        let state = ViewState::from_result(Ok::<_, String>(Vec::<u32>::new()));
        assert_eq!(state, ViewState::Empty);
    }

    #[test]
    fn populated_list_renders_ready() {
        let state = ViewState::from_result(Ok::<_, String>(vec![1, 2]));
        assert_eq!(state.ready(), Some(&vec![1, 2]));
    }

    #[test]
    fn fetch_failure_carries_the_message_only() {
        let state: ViewState<Vec<u32>> =
            ViewState::from_result(Err("API error 404: Not found".to_string()));
        assert_eq!(
            state,
            ViewState::Failed("API error 404: Not found".to_string())
        );
    }

    #[test]
    fn loading_is_distinct_from_empty() {
        let state: ViewState<Vec<u32>> = ViewState::Loading;
        assert!(state.is_loading());
        assert_ne!(state, ViewState::Empty);
    }
}
