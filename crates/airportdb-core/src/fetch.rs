// crates/airportdb-core/src/fetch.rs
use serde::Serialize;
use std::fmt::Display;

/// Outcome of asking the data source for the airport list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    /// Request in flight; nothing to show yet.
    Pending,
    /// Request failed with a human-readable reason.
    Failed(String),
    /// Data arrived.
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// Drops the payload, keeping only the status.
    pub fn status(&self) -> FetchState<()> {
        match self {
            Self::Pending => FetchState::Pending,
            Self::Failed(r) => FetchState::Failed(r.clone()),
            Self::Ready(_) => FetchState::Ready(()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Pending => FetchState::Pending,
            Self::Failed(r) => FetchState::Failed(r),
            Self::Ready(v) => FetchState::Ready(f(v)),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for FetchState<T> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Self::Ready(v),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_conversion() {
        let ok: FetchState<u8> = Ok::<_, String>(3).into();
        assert_eq!(ok, FetchState::Ready(3));

        let err: FetchState<u8> = Err::<u8, _>("boom").into();
        assert_eq!(err, FetchState::Failed("boom".into()));
    }

    #[test]
    fn status_strips_payload() {
        assert_eq!(FetchState::Ready(vec![1, 2]).status(), FetchState::Ready(()));
        assert!(FetchState::<u8>::default().is_pending());
    }
}
