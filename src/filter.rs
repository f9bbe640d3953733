use crate::{Error, Frame, Sample};

/// Streaming frame filter.
///
/// Filters carry per-channel delay-line state across calls, so feeding a
/// stream through successive frames continues seamlessly where the previous
/// frame left off. State is independent per channel; within a channel the
/// samples of a frame must be visited in ascending index order.
pub trait Filter<T: Sample> {
    /// Filter the frame in place.
    ///
    /// Fails with [`Error::ChannelMismatch`] if the frame's channel count
    /// differs from the filter's.
    fn process_inplace(&mut self, frame: &mut Frame<T>) -> Result<(), Error>;

    /// Filter into a new frame, leaving the input untouched.
    fn process(&mut self, frame: &Frame<T>) -> Result<Frame<T>, Error> {
        let mut output = frame.clone();
        self.process_inplace(&mut output)?;
        Ok(output)
    }

    /// Zero all delay-line state.
    ///
    /// Use between disjoint streams to avoid cross-talk from stale history:
    /// after a reset the filter behaves like a freshly constructed one.
    fn reset(&mut self);
}
