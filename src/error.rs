#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A contract operation was invoked on a type that never overrode it.
    #[error("unimplemented abstract operation `{operation}`")]
    Unimplemented { operation: &'static str },

    #[error("bootstrap dataset must contain at least one item")]
    EmptyDataset,

    #[error("seed sequence must contain at least one value")]
    EmptySeed,
}
