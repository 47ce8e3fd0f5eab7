mod dispatcher;
mod pool;
mod tasks;

pub use dispatcher::Dispatcher;
pub use pool::PoolDispatch;
pub use tasks::TaskDispatch;
