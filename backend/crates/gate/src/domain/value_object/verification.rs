use http::StatusCode;

/// Outcome of one upstream identity check
///
/// Lives for a single request; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub ok: bool,
}

impl Verification {
    pub const fn accepted() -> Self {
        Self { ok: true }
    }

    pub const fn rejected() -> Self {
        Self { ok: false }
    }

    /// Any 2xx is acceptance; every other status is rejection
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            ok: status.is_success(),
        }
    }
}
