//! [`Handler`] abstractions.

/// Executable handler.
///
/// Everything behind a [`Handler`] completes synchronously: pricing is pure
/// arithmetic and page integrations are fire-and-forget.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Handler::Err`] if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
