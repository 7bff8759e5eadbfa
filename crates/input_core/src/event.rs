/// Mouse button reported for a plain primary-button click.
pub const PRIMARY_BUTTON: i16 = 0;

/// A click as the platform reports it.
pub trait ClickEvent {
    fn ctrl_key(&self) -> bool;
    fn meta_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    /// `0` is the primary button, `1` the wheel, `2` the secondary button.
    fn button(&self) -> i16;

    /// Suppress the platform's default action (following a link, submitting a form).
    fn prevent_default(&mut self);
    /// Stop the event from bubbling to ancestor elements.
    fn stop_propagation(&mut self);

    /// Whether the browser will open the click target in a new tab or window
    /// on its own: a held ctrl/meta/shift key, or any button but the primary one.
    fn opens_new_tab(&self) -> bool {
        self.ctrl_key() || self.meta_key() || self.shift_key() || self.button() != PRIMARY_BUTTON
    }
}

/// An input event on a text control.
pub trait InputEvent {
    /// Current value of the control the event targets.
    fn target_value(&self) -> &str;
}

/// Plain-data [`ClickEvent`] that records what the handler did to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawClickEvent {
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub button: i16,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl RawClickEvent {
    /// Unmodified primary-button click.
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_button(button: i16) -> Self {
        Self {
            button,
            ..Self::default()
        }
    }
}

impl ClickEvent for RawClickEvent {
    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn button(&self) -> i16 {
        self.button
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputEvent {
    pub value: String,
}

impl RawInputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl InputEvent for RawInputEvent {
    fn target_value(&self) -> &str {
        &self.value
    }
}
