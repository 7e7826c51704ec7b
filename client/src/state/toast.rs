//! Transient notification shown in the toast container.
//!
//! DESIGN
//! ======
//! Each `show` bumps a generation counter. The auto-dismiss timer captures
//! the generation it was started for, so a stale timer cannot hide a newer
//! toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual style of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Alert class applied next to the base `alert` class.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Display `message` and return the generation to pass to [`Self::dismiss`].
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the toast if it is still the one shown at `generation`.
    pub fn dismiss(&mut self, generation: u64) {
        if self.generation == generation {
            self.visible = false;
        }
    }
}
