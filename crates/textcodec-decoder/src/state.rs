/// Mutable per-instance record carried between decode calls.
///
/// The immutable half of a decoder (encoding and option flags) lives
/// on [`TextDecoder`](crate::TextDecoder) itself; this struct holds
/// only what a call may change.
///
/// Invariants between calls:
///   - `pending.len() <= encoding.max_pending_len()` (3 bytes).
///   - after a non-streaming call, `pending` is empty and
///     `bom_resolved` is false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DecoderState {
    /// Bytes held back from the previous streaming call: an incomplete
    /// sequence, or a possible byte order mark not yet decided on.
    pub(crate) pending: Vec<u8>,

    /// Set once the byte order mark question has been answered for
    /// the current stream.
    pub(crate) bom_resolved: bool,
}

impl DecoderState {
    /// Drain the carried-over bytes and append `input` after them.
    pub(crate) fn take_working(&mut self, input: &[u8]) -> Vec<u8> {
        let mut working = std::mem::take(&mut self.pending);
        working.extend_from_slice(input);
        working
    }

    /// Restore the just-constructed state.
    pub(crate) fn reset(&mut self) {
        self.pending.clear();
        self.bom_resolved = false;
    }
}
