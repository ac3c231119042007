use std::path::PathBuf;
use std::time::Duration;

/// Server context, passed to the accept loop and the file watcher.
///
/// There is no external configuration surface (no CLI, no env, no file); the
/// defaults below are the fixed operating parameters. Fields are public so
/// tests can point the server at a scratch directory or an ephemeral port.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Accept backlog for the listening socket.
    pub backlog: u32,
    /// Directory files are served from.
    pub root: PathBuf,
    /// Delay between file watcher polls.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            backlog: 10,
            root: PathBuf::from("."),
            poll_interval: Duration::from_millis(500),
        }
    }
}
