pub mod tracing;

pub use self::tracing::{TracingConfig, TracingError, TracingGuard, init_tracing};
