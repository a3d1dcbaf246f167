use crate::errors::CommandError;
use log::debug;
use std::io::Write;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;

pub struct Runner;
impl Runner {
    pub fn command(runtime: &str, artifact: &Path, forwarded: &[String]) -> Command {
        let mut command = Command::new(runtime);
        command.arg("-jar").arg(artifact).args(forwarded);
        command
    }

    /// Runs the jar to completion, then relays its stdout and stderr.
    pub async fn run(
        runtime: &str,
        artifact: &Path,
        forwarded: &[String],
    ) -> Result<(), CommandError> {
        debug!(
            "Running {runtime} -jar {} {}",
            artifact.display(),
            forwarded.join(" ")
        );

        let output = Self::command(runtime, artifact, forwarded)
            .output()
            .await
            .map_err(|e| CommandError::FailedToSpawn(runtime.to_string(), e))?;

        Self::relay(
            &output,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )
    }

    /// Copies captured runtime output to the given writers and maps a failing exit status.
    pub fn relay(
        output: &Output,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<(), CommandError> {
        err.write_all(&output.stderr)
            .and_then(|_| err.flush())
            .map_err(CommandError::FailedToRelayOutput)?;
        out.write_all(&output.stdout)
            .and_then(|_| out.flush())
            .map_err(CommandError::FailedToRelayOutput)?;

        if !output.status.success() {
            return Err(CommandError::RuntimeFailed(output.status));
        }

        Ok(())
    }
}
