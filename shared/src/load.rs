/// Why a fetch produced no data. Every variant degrades to an empty panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("fetch error: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
}

/// Per-view remote data state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded rows; empty while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_renders_as_empty_list() {
        let state: LoadState<Vec<u32>> = LoadState::from_result(Err(FetchError::Status(500)));
        assert!(state.is_failed());
        assert!(state.items().is_empty());
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn ready_state_exposes_rows() {
        let state = LoadState::from_result(Ok(vec![1, 2, 3]));
        assert_eq!(state.items(), &[1, 2, 3]);
        assert!(!state.is_loading());
    }

    #[test]
    fn errors_render_compact_messages() {
        assert_eq!(FetchError::Status(502).to_string(), "HTTP 502");
        assert_eq!(
            FetchError::Decode("missing field".into()).to_string(),
            "parse error: missing field"
        );
    }
}
