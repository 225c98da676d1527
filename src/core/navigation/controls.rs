/// Raw input read once per frame.
///
/// `cursor_position` is in raster space with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub primary_button_down: bool,
    pub zoom_in_requested: bool,
    pub zoom_out_requested: bool,
    pub reset_requested: bool,
    pub cursor_position: (f64, f64),
}

/// Pressed state of the edge-triggered controls as of the previous frame.
///
/// A control whose flag is `false` is armed; the next frame that reads it as
/// pressed fires its action and leaves the flag set until it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressLatch {
    pub primary_button: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressEdges {
    pub primary_button: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl PressLatch {
    #[must_use]
    pub fn from_snapshot(input: &InputSnapshot) -> Self {
        Self {
            primary_button: input.primary_button_down,
            zoom_in: input.zoom_in_requested,
            zoom_out: input.zoom_out_requested,
        }
    }

    /// Controls that went from released to pressed between the latched frame
    /// and `input`.
    #[must_use]
    pub fn rising_edges(&self, input: &InputSnapshot) -> PressEdges {
        PressEdges {
            primary_button: input.primary_button_down && !self.primary_button,
            zoom_in: input.zoom_in_requested && !self.zoom_in,
            zoom_out: input.zoom_out_requested && !self.zoom_out,
        }
    }
}
