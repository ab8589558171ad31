//! Infrastructure implementation of the `ProcessLauncher` port.
//!
//! `TokioProcessLauncher` starts children through `tokio::process` so the
//! foreground wait can race Ctrl-C and kill the child explicitly on every
//! platform.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::{LaunchSpec, ProcessLauncher, RunningProcess};

/// Production `ProcessLauncher`.
pub struct TokioProcessLauncher;

/// A child started by [`TokioProcessLauncher::start`], stdio inherited.
pub struct TokioChild {
    program: String,
    child: tokio::process::Child,
}

fn command(spec: &LaunchSpec) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(dir) = &spec.cwd {
        cmd.current_dir(dir);
    }
    cmd
}

impl ProcessLauncher for TokioProcessLauncher {
    type Running = TokioChild;

    fn start(&self, spec: &LaunchSpec) -> Result<TokioChild> {
        let child = command(spec)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", spec.program))?;
        Ok(TokioChild {
            program: spec.program.clone(),
            child,
        })
    }

    fn start_detached(&self, spec: &LaunchSpec) -> Result<()> {
        command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {}", spec.program))?;
        Ok(())
    }
}

impl RunningProcess for TokioChild {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait(mut self) -> Result<ExitStatus> {
        let program = self.program;
        tokio::select! {
            status = self.child.wait() => {
                status.with_context(|| format!("waiting for {program}"))
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("listening for Ctrl-C")?;
                tracing::info!(program = %program, "interrupted, stopping child");
                let _ = self.child.kill().await;
                self.child
                    .wait()
                    .await
                    .with_context(|| format!("waiting for {program}"))
            }
        }
    }
}
