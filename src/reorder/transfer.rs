use super::event::DataTransfer;

/// Default format identifier for the source-index payload.
///
/// Namespaced so drags started by unrelated sources in the same host are never mistaken for ours.
pub const TRANSFER_FORMAT: &str = "application/x-egui-reorder";

/// Why a drop could not recover the element it is moving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// The transfer channel holds nothing under our format.
    Missing,

    /// The payload is not a decimal index.
    Malformed { raw: String },

    /// The payload names an index past the end of the collection.
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no reorder payload in the transfer channel"),
            Self::Malformed { raw } => write!(f, "malformed reorder payload: {raw:?}"),
            Self::OutOfRange { index, len } => {
                write!(f, "reorder payload index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// Store `index` as the payload under `format`.
pub fn write_source_index(transfer: &mut DataTransfer, format: &str, index: usize) {
    transfer.set_data(format, index.to_string());
}

/// Recover the source index written by [`write_source_index`], checked against a collection of
/// `len` elements.
///
/// # Errors
/// Fails closed on a missing, non-numeric or out-of-range payload.
pub fn read_source_index(
    transfer: &DataTransfer,
    format: &str,
    len: usize,
) -> Result<usize, PayloadError> {
    let raw = transfer.get_data(format).ok_or(PayloadError::Missing)?;
    let index: usize = raw.trim().parse().map_err(|_err| PayloadError::Malformed {
        raw: raw.to_owned(),
    })?;
    if index >= len {
        return Err(PayloadError::OutOfRange { index, len });
    }
    Ok(index)
}
