use crate::grid::{self, Cell};
use crate::input::events::MouseButton;
use crate::input::hotzone::{self, HotZone, PARTIAL_RESET_LABEL};
use crate::input::Mode;
use crate::util::Rect;
use log::debug;

use super::Session;

impl Session {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Left click: hot-zones first, then START/GOAL placement or arming
    ///   barrier painting in BARRIER mode
    /// - Right click: clears an endpoint under the pointer, otherwise arms
    ///   barrier erasing in BARRIER mode (ignored while running)
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        self.pointer = Some((x, y));

        match button {
            MouseButton::Left => self.on_primary_press(x, y),
            MouseButton::Right => self.on_secondary_press(x, y),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion. Only the tracked pointer position changes;
    /// painting happens in [`Session::update`].
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.pointer = Some((x, y));
    }

    /// Processes a mouse button release event. Any button disarms dragging.
    pub fn on_mouse_release(&mut self, _button: MouseButton, x: i32, y: i32) {
        self.pointer = Some((x, y));
        self.drag.disarm();
    }

    fn on_primary_press(&mut self, x: i32, y: i32) {
        if let Some(zone) = self.hot_zone_at(x, y) {
            self.activate_hot_zone(zone);
            return;
        }

        if !grid::in_grid_area(x, y) {
            return;
        }

        let cell = Cell::from_pixel(x, y);
        match self.mode {
            Mode::Start | Mode::Goal => self.place_endpoint(cell),
            Mode::Barrier => self.drag.arm_painting(),
            Mode::Run | Mode::Solved | Mode::Failed => {
                debug!("Ignoring grid click in {} mode", self.mode.name());
            }
        }
    }

    fn on_secondary_press(&mut self, x: i32, y: i32) {
        if self.mode.is_running() {
            debug!("Ignoring secondary click while running");
            return;
        }

        if !grid::in_grid_area(x, y) {
            return;
        }

        let cell = Cell::from_pixel(x, y);
        if self.clear_endpoint_at(cell) {
            return;
        }

        if self.mode == Mode::Barrier {
            self.drag.arm_erasing();
        }
    }

    /// Returns the active hot-zone under the pointer, if any.
    pub fn hot_zone_at(&self, x: i32, y: i32) -> Option<HotZone> {
        HotZone::ALL.into_iter().find(|zone| {
            zone.active_in(self.mode)
                && self
                    .hot_zone_rect(*zone)
                    .is_some_and(|rect| rect.contains(x, y))
        })
    }

    /// Pixel rectangle of `zone` as currently labelled.
    pub fn hot_zone_rect(&self, zone: HotZone) -> Option<Rect> {
        let text = match zone {
            HotZone::PieceSelector => hotzone::piece_label(self.piece),
            HotZone::AnimateToggle => hotzone::animate_label(self.animate),
            HotZone::RunControl => Mode::Barrier.prompt()?.to_string(),
            HotZone::FullReset => Mode::Solved.prompt()?.to_string(),
            HotZone::PartialReset => PARTIAL_RESET_LABEL.to_string(),
        };
        hotzone::label_rect(zone.origin(), &text)
    }

    fn activate_hot_zone(&mut self, zone: HotZone) {
        debug!("Activated {:?}", zone);
        match zone {
            HotZone::PieceSelector => self.cycle_piece(),
            HotZone::AnimateToggle => self.toggle_animate(),
            HotZone::RunControl => self.request_run(),
            HotZone::FullReset => self.reset_full(),
            HotZone::PartialReset => self.reset_partial(),
        }
    }
}
