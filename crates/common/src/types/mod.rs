use serde::Serialize;

/// Body of the `/health` probe.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub const fn ok() -> Self { Self { status: "ok" } }

    pub const fn unavailable() -> Self { Self { status: "unavailable" } }
}
