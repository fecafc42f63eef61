use std::time::Duration;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn base_url(&self) -> String;
    fn timeout(&self) -> Option<Duration>;
    fn log_level(&self) -> String;
}
