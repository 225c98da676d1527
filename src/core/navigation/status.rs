#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    DiameterClamped,
    NonFiniteCenter,
}

/// What a single controller update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewUpdateReport {
    pub panned: bool,
    pub zoomed_in: bool,
    pub zoomed_out: bool,
    pub reset: bool,
    pub warning: Option<NavigationWarning>,
}

impl ViewUpdateReport {
    #[must_use]
    pub fn any_action(&self) -> bool {
        self.panned || self.zoomed_in || self.zoomed_out || self.reset
    }
}
