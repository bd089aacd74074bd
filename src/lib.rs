pub mod cli;
pub mod config;
pub mod notify;
pub mod telemetry;

#[cfg(test)]
mod test_utils;
