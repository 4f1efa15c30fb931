use super::transfer::TRANSFER_FORMAT;

/// Options for [`super::DragReorderController`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    /// Format identifier the source index is stored under in the transfer channel.
    ///
    /// Two controllers sharing a host should use distinct formats, otherwise a drop on one
    /// will be resolved against the other's collection.
    pub transfer_format: String,

    /// Presentation marker added to the dragged element on start and removed on end.
    pub marker: String,

    /// If true, record session events in a small ring buffer, readable with
    /// [`super::DragReorderController::debug_log_text`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            transfer_format: TRANSFER_FORMAT.to_owned(),
            marker: "dragged".to_owned(),
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

impl ReorderOptions {
    pub(crate) fn debug_log_capacity(&self) -> usize {
        self.debug_event_log_capacity.clamp(1, 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_capacity_is_clamped() {
        let opt = ReorderOptions {
            debug_event_log_capacity: 0,
            ..Default::default()
        };
        assert_eq!(opt.debug_log_capacity(), 1);

        let opt = ReorderOptions {
            debug_event_log_capacity: usize::MAX,
            ..Default::default()
        };
        assert_eq!(opt.debug_log_capacity(), 10_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_ron_config_keeps_defaults() {
        let opt: ReorderOptions =
            ron::from_str(r#"(marker: "lifted", debug_event_log: true)"#).unwrap();
        assert_eq!(opt.marker, "lifted");
        assert!(opt.debug_event_log);
        assert_eq!(opt.transfer_format, TRANSFER_FORMAT);
        assert_eq!(opt.debug_event_log_capacity, 200);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_config_overrides_transfer_format() {
        let opt: ReorderOptions =
            serde_json::from_str(r#"{ "transfer_format": "application/x-playlist" }"#).unwrap();
        assert_eq!(opt.transfer_format, "application/x-playlist");
        assert_eq!(opt.marker, "dragged");
    }
}
