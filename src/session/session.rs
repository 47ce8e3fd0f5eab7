use crate::{
    driver::{Driver, FitReport},
    error::Result,
    search::dispatch::Dispatcher,
};

/// This trait acts as an indirection layer, allowing the `SessionBuilder` to return
/// drivers with different dispatchers from its unique build method.
#[async_trait::async_trait]
pub trait Session: Send {
    /// Indirection method for `Driver::run`.
    async fn run(self: Box<Self>) -> Result<FitReport>;
}

#[async_trait::async_trait]
impl<D> Session for Driver<D>
where
    D: Dispatcher + Sync + 'static,
{
    /// Indirection call to `Driver::run`.
    async fn run(self: Box<Self>) -> Result<FitReport> {
        Driver::run(*self).await
    }
}
