use input_core::Pointer;
use std::fmt;
use std::rc::Rc;

pub type InputHandler<M> = Rc<dyn Fn(String) -> M>;
pub type PointerHandler<M> = Rc<dyn Fn(Pointer) -> M>;

/// What a click on a bound element sends, and how it treats the raw event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickMessageData<M> {
    pub message: M,
    /// Leave ctrl/meta/shift and non-primary clicks to the browser so links
    /// still open in a new tab; otherwise suppress the default action.
    pub ignore_new_tab: bool,
    pub stop_propagation: bool,
}

impl<M> ClickMessageData<M> {
    pub fn new(message: M) -> Self {
        Self {
            message,
            ignore_new_tab: false,
            stop_propagation: false,
        }
    }

    /// For in-app links: handles plain clicks, leaves new-tab clicks alone.
    pub fn link(message: M) -> Self {
        Self {
            message,
            ignore_new_tab: true,
            stop_propagation: false,
        }
    }

    pub fn stopping_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}

/// Handlers bound to one element. Kept out of the rendered markup.
pub struct Events<M> {
    pub on_click: Option<ClickMessageData<M>>,
    pub on_change: Option<M>,
    pub on_input: Option<InputHandler<M>>,
    pub on_pointer_move: Option<PointerHandler<M>>,
    pub on_pointer_down: Option<PointerHandler<M>>,
}

impl<M> Events<M> {
    pub fn new() -> Self {
        Self {
            on_click: None,
            on_change: None,
            on_input: None,
            on_pointer_move: None,
            on_pointer_down: None,
        }
    }

    pub fn click(message: M) -> Self {
        Self {
            on_click: Some(ClickMessageData::new(message)),
            ..Self::new()
        }
    }

    pub fn change(message: M) -> Self {
        Self {
            on_change: Some(message),
            ..Self::new()
        }
    }

    pub fn input(handler: impl Fn(String) -> M + 'static) -> Self {
        Self {
            on_input: Some(Rc::new(handler)),
            ..Self::new()
        }
    }

    pub fn with_click(mut self, click: ClickMessageData<M>) -> Self {
        self.on_click = Some(click);
        self
    }

    pub fn with_pointer_move(mut self, handler: impl Fn(Pointer) -> M + 'static) -> Self {
        self.on_pointer_move = Some(Rc::new(handler));
        self
    }

    pub fn with_pointer_down(mut self, handler: impl Fn(Pointer) -> M + 'static) -> Self {
        self.on_pointer_down = Some(Rc::new(handler));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_click.is_none()
            && self.on_change.is_none()
            && self.on_input.is_none()
            && self.on_pointer_move.is_none()
            && self.on_pointer_down.is_none()
    }
}

impl<M> Default for Events<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> Clone for Events<M> {
    fn clone(&self) -> Self {
        Self {
            on_click: self.on_click.clone(),
            on_change: self.on_change.clone(),
            on_input: self.on_input.clone(),
            on_pointer_move: self.on_pointer_move.clone(),
            on_pointer_down: self.on_pointer_down.clone(),
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for Events<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("on_click", &self.on_click)
            .field("on_change", &self.on_change)
            .field("on_input", &self.on_input.is_some())
            .field("on_pointer_move", &self.on_pointer_move.is_some())
            .field("on_pointer_down", &self.on_pointer_down.is_some())
            .finish()
    }
}
