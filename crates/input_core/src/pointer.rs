/// Pointer event metrics as the platform reports them.
///
/// Field meanings follow the DOM `PointerEvent` interface. `pointer_type` is
/// free-form here; [`Pointer::from_raw`] narrows it to [`PointerKind`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub width: f64,
    pub height: f64,
    pub is_primary: bool,
    pub pointer_id: i64,
    pub pointer_type: String,
    pub pressure: f64,
    pub tangential_pressure: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub twist: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
    /// The platform could not tell, or reported something outside the other three.
    #[default]
    Unknown,
}

impl PointerKind {
    /// Narrows a platform `pointerType` string to the closed set.
    ///
    /// An empty string is the platform's own "unknown" and maps silently.
    /// Anything else unrecognized maps to [`PointerKind::Unknown`] with an
    /// info-level diagnostic.
    pub fn from_platform(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            "touch" => PointerKind::Touch,
            "" => PointerKind::Unknown,
            other => {
                log::info!(
                    target: "input_core.pointer",
                    "unrecognized pointer type {other:?}, treating as unknown"
                );
                PointerKind::Unknown
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mouse",
            PointerKind::Pen => "pen",
            PointerKind::Touch => "touch",
            PointerKind::Unknown => "",
        }
    }
}

/// Normalized pointer sample handed to pointer handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    /// Contact ellipse size.
    pub width: f64,
    pub height: f64,
    pub is_primary: bool,
    pub pointer_id: i64,
    pub kind: PointerKind,
    pub pressure: f64,
    pub tangential_pressure: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub twist: f64,
}

impl Pointer {
    pub fn from_raw(raw: &RawPointerEvent) -> Self {
        Self {
            x: raw.client_x,
            y: raw.client_y,
            width: raw.width,
            height: raw.height,
            is_primary: raw.is_primary,
            pointer_id: raw.pointer_id,
            kind: PointerKind::from_platform(&raw.pointer_type),
            pressure: raw.pressure,
            tangential_pressure: raw.tangential_pressure,
            tilt_x: raw.tilt_x,
            tilt_y: raw.tilt_y,
            twist: raw.twist,
        }
    }
}

impl From<&RawPointerEvent> for Pointer {
    fn from(raw: &RawPointerEvent) -> Self {
        Pointer::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Records land on the thread that logged them, so parallel tests don't see each other's.
    struct CaptureLogger;

    thread_local! {
        static RECORDS: RefCell<Vec<(log::Level, String, String)>> = const { RefCell::new(Vec::new()) };
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            RECORDS.with(|records| {
                records.borrow_mut().push((
                    record.level(),
                    record.target().to_string(),
                    record.args().to_string(),
                ))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(log::Level, String, String)>) {
        // Another test may have installed it already; either way it is ours.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        RECORDS.with(|records| records.borrow_mut().clear());
        let out = f();
        let records = RECORDS.with(|records| records.borrow_mut().drain(..).collect());
        (out, records)
    }

    fn pen_event() -> RawPointerEvent {
        RawPointerEvent {
            client_x: 12.5,
            client_y: 40.0,
            width: 1.0,
            height: 1.0,
            is_primary: true,
            pointer_id: 7,
            pointer_type: "pen".to_string(),
            pressure: 0.6,
            tangential_pressure: 0.1,
            tilt_x: -15.0,
            tilt_y: 30.0,
            twist: 90.0,
        }
    }

    #[test]
    fn recognized_kinds_map_one_to_one() {
        assert_eq!(PointerKind::from_platform("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_platform("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_platform("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_platform(""), PointerKind::Unknown);
    }

    #[test]
    fn unrecognized_kinds_fall_back_to_unknown() {
        assert_eq!(PointerKind::from_platform("eye-tracker"), PointerKind::Unknown);
        assert_eq!(PointerKind::from_platform("Mouse"), PointerKind::Unknown);
    }

    #[test]
    fn unrecognized_kind_emits_one_info_record() {
        let (kind, records) = capture_logs(|| PointerKind::from_platform("eye-tracker"));
        assert_eq!(kind, PointerKind::Unknown);
        assert_eq!(records.len(), 1, "{records:?}");
        let (level, target, message) = &records[0];
        assert_eq!(*level, log::Level::Info);
        assert_eq!(target, "input_core.pointer");
        assert!(message.contains("\"eye-tracker\""), "{message}");
    }

    #[test]
    fn empty_and_known_kinds_log_nothing() {
        let (kinds, records) = capture_logs(|| {
            ["", "mouse", "pen", "touch"].map(PointerKind::from_platform)
        });
        assert_eq!(
            kinds,
            [
                PointerKind::Unknown,
                PointerKind::Mouse,
                PointerKind::Pen,
                PointerKind::Touch
            ]
        );
        assert!(records.is_empty(), "{records:?}");
    }

    #[test]
    fn kind_strings_round_trip() {
        for kind in [
            PointerKind::Mouse,
            PointerKind::Pen,
            PointerKind::Touch,
            PointerKind::Unknown,
        ] {
            assert_eq!(PointerKind::from_platform(kind.as_str()), kind);
        }
    }

    #[test]
    fn from_raw_copies_every_metric() {
        let pointer = Pointer::from_raw(&pen_event());
        assert_eq!(
            pointer,
            Pointer {
                x: 12.5,
                y: 40.0,
                width: 1.0,
                height: 1.0,
                is_primary: true,
                pointer_id: 7,
                kind: PointerKind::Pen,
                pressure: 0.6,
                tangential_pressure: 0.1,
                tilt_x: -15.0,
                tilt_y: 30.0,
                twist: 90.0,
            }
        );
    }

    #[test]
    fn from_raw_normalizes_kind() {
        let mut raw = pen_event();
        raw.pointer_type = "stylus-ish".to_string();
        assert_eq!(Pointer::from(&raw).kind, PointerKind::Unknown);
    }
}
