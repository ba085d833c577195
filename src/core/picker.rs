use crate::core::dial::{Dial, DialComponent, DialLabel, DialPoint, hand_angle};
use crate::errors::AppResult;
use crate::models::{Meridiem, TimeOfDay};

/// What the dial is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    SelectingHour,
    SelectingMinute,
}

impl PickerState {
    pub fn component(&self) -> DialComponent {
        match self {
            PickerState::SelectingHour => DialComponent::Hour,
            PickerState::SelectingMinute => DialComponent::Minute,
        }
    }
}

impl From<DialComponent> for PickerState {
    fn from(c: DialComponent) -> Self {
        match c {
            DialComponent::Hour => PickerState::SelectingHour,
            DialComponent::Minute => PickerState::SelectingMinute,
        }
    }
}

/// Transient state of the clock-face time picker.
///
/// The hour is kept as shown on the face (1-12) next to an independent
/// AM/PM selector; the two are only combined by [`TimePicker::commit`].
#[derive(Debug, Clone)]
pub struct TimePicker {
    dial: Dial,
    state: PickerState,
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl TimePicker {
    pub fn new(dial: Dial, initial: TimeOfDay) -> Self {
        Self {
            dial,
            state: PickerState::SelectingHour,
            hour: initial.hour12(),
            minute: initial.minutes(),
            meridiem: initial.meridiem(),
        }
    }

    /// Picker opened on the current wall-clock time.
    pub fn starting_now(dial: Dial) -> Self {
        Self::new(dial, TimeOfDay::now())
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Tap on the hour or minute display.
    pub fn select(&mut self, component: DialComponent) {
        self.state = component.into();
    }

    pub fn set_meridiem(&mut self, meridiem: Meridiem) {
        self.meridiem = meridiem;
    }

    /// Pointer moved while dragging on the dial.
    pub fn drag_changed(&mut self, pointer: DialPoint) {
        let component = self.state.component();
        let value = self.dial.value_at(component, pointer);
        match component {
            DialComponent::Hour => self.hour = value,
            DialComponent::Minute => self.minute = value,
        }
        log::trace!(
            "drag at ({:.1}, {:.1}) -> {}",
            pointer.x,
            pointer.y,
            self.display()
        );
    }

    /// Pointer lifted; the last position is applied like any other move.
    pub fn drag_ended(&mut self, pointer: DialPoint) {
        self.drag_changed(pointer);
    }

    /// Fold the face value and the AM/PM selector into a 24-hour time.
    pub fn commit(&self) -> AppResult<TimeOfDay> {
        TimeOfDay::from_12h(self.hour, self.minute, self.meridiem)
    }

    /// "h:MM AM", as shown above the dial.
    pub fn display(&self) -> String {
        format!("{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }

    pub fn confirmation(&self) -> String {
        format!("Your alarm is set for {}", self.display())
    }

    /// Angle of the indicator hand for the active component.
    pub fn hand_angle(&self) -> f64 {
        match self.state.component() {
            DialComponent::Hour => hand_angle(DialComponent::Hour, self.hour),
            DialComponent::Minute => hand_angle(DialComponent::Minute, self.minute),
        }
    }

    /// Position of the indicator knob for the active component.
    pub fn hand_position(&self) -> DialPoint {
        let component = self.state.component();
        let value = match component {
            DialComponent::Hour => self.hour,
            DialComponent::Minute => self.minute,
        };
        self.dial.position_of(component, value)
    }

    pub fn labels(&self) -> Vec<DialLabel> {
        self.dial.labels(self.state.component())
    }
}
