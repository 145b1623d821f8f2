//! The single status message shown under the form.

/// Success and error messages are cleared this long after being shown
pub const STATUS_CLEAR_MS: u64 = 5_000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    #[default]
    None,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Loading messages stay until replaced
    #[inline]
    pub const fn auto_clears(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind == StatusKind::None
    }
}

/// Holds the current [`Status`] and when it should be cleared.
///
/// Time is supplied by the caller in milliseconds since any fixed epoch,
/// no timers are spawned. Showing a new status always replaces the previous
/// one along with its pending clear.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct StatusBoard {
    status: Status,
    clear_at: Option<u64>,
}

impl StatusBoard {
    #[inline]
    pub const fn new() -> Self {
        Self {
            status: Status {
                message: String::new(),
                kind: StatusKind::None,
            },
            clear_at: None,
        }
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[inline]
    pub const fn clear_at(&self) -> Option<u64> {
        self.clear_at
    }

    pub fn show(&mut self, message: impl Into<String>, kind: StatusKind, now_ms: u64) {
        self.status = Status {
            message: message.into(),
            kind,
        };
        self.clear_at = kind
            .auto_clears()
            .then(|| now_ms.saturating_add(STATUS_CLEAR_MS));
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Clears the status if its deadline has passed.
    /// Returns true if the status was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.clear_at {
            Some(t) if now_ms >= t => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}
