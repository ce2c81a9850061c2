/// Values that can be handed to several observers of the same future.
///
/// The underlying future is shared, so every observer receives its own clone
/// of the outcome, possibly on another thread.
pub trait Shareable: Clone + Send + Sync + 'static {}

impl<T> Shareable for T where T: Clone + Send + Sync + 'static {}
