mod error;
mod poller;
mod runtime;

pub use error::FetchError;
pub use poller::Poller;
pub use runtime::FetchRuntime;
