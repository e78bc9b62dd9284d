//! # Admin gate
//!
//! Admission to the admin dashboard is decided by an external executable
//! invoked with the username as its single argument. The executable is an
//! untrusted black box: only its exit code is consumed, and **exit code 1
//! admits** while every other exit code denies. Any invocation failure
//! (missing binary, spawn error, timeout, signal death) also denies, so
//! the gate can never crash on a misbehaving collaborator and never fails
//! open.

use std::{collections::HashSet, path::PathBuf, process::Stdio, time::Duration};

use async_trait::async_trait;
use tokio::{process::Command, time::timeout};
use tracing::warn;

/// Yes/no authorization capability keyed on a username.
#[async_trait]
pub trait AuthorizationOracle: Send + Sync {
    async fn is_admin(&self, username: &str) -> bool;
}

/// Production oracle backed by the external admin-check executable.
pub struct ProcessOracle {
    executable: PathBuf,
    timeout: Duration,
}

impl ProcessOracle {
    pub fn new(executable: PathBuf, timeout: Duration) -> Self {
        Self {
            executable,
            timeout,
        }
    }
}

#[async_trait]
impl AuthorizationOracle for ProcessOracle {
    async fn is_admin(&self, username: &str) -> bool {
        if username.is_empty() {
            return false;
        }

        let child = Command::new(&self.executable)
            .arg(username)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(err) => {
                warn!("Admin check could not start: {err}");
                return false;
            }
        };

        match timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => {
                #[cfg(feature = "verbose")]
                tracing::info!("Admin check exited with {status:?}");

                status.code() == Some(1)
            }
            Ok(Err(err)) => {
                warn!("Admin check failed: {err}");
                false
            }
            Err(_) => {
                warn!("Admin check timed out after {:?}", self.timeout);
                let _ = child.kill().await;
                false
            }
        }
    }
}

/// In-memory oracle holding a fixed allow-list. Lets the gate's fail-closed
/// behavior be exercised without spawning processes, and doubles as a local
/// stand-in when no external executable is installed.
#[derive(Default)]
pub struct StaticOracle {
    admins: HashSet<String>,
}

impl StaticOracle {
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl AuthorizationOracle for StaticOracle {
    async fn is_admin(&self, username: &str) -> bool {
        !username.is_empty() && self.admins.contains(username)
    }
}
