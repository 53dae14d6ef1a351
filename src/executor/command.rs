use std::process::Stdio;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tokio::time::timeout;

/// Runs one external command to completion and returns its captured stdout.
///
/// Launch errors, i/o errors, timeout expiry and non-zero exits are all
/// reported as the same "Execution failed" condition; callers can only tell
/// them apart by the diagnostic text. The child is killed if the time budget
/// elapses, so a hung toolchain never outlives the request.
pub async fn execute_command(
    program: &str,
    args: &[String],
    time_limit: Duration,
) -> Result<String> {
    let output = run_to_completion(program, args, time_limit).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            format!("{program} exited with {:?}", output.status.code())
        } else {
            stderr.trim_end().to_string()
        };
        return Err(anyhow!("Execution failed: {detail}"));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Like [`execute_command`], but a non-zero exit still yields the captured
/// stdout. The JUnit console runner exits non-zero whenever an assertion
/// fails, which is a reportable outcome here, not a launch failure.
pub async fn execute_command_unchecked(
    program: &str,
    args: &[String],
    time_limit: Duration,
) -> Result<String> {
    let output = run_to_completion(program, args, time_limit).await?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

async fn run_to_completion(
    program: &str,
    args: &[String],
    time_limit: Duration,
) -> Result<std::process::Output> {
    log::debug!("spawning: {program} {}", args.join(" "));

    let mut command = tokio::process::Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = command
        .spawn()
        .map_err(|e| anyhow!("Execution failed: cannot start {program}: {e}"))?;

    // Dropping the wait future on timeout drops the child, which kills it.
    match timeout(time_limit, child.wait_with_output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(anyhow!("Execution failed: {e}")),
        Err(_) => Err(anyhow!(
            "Execution failed: timed out after {}ms",
            time_limit.as_millis()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SECOND: Duration = Duration::from_secs(1);

    #[tokio::test]
    async fn test_captures_stdout() {
        let output = execute_command("echo", &["hello".to_string()], ONE_SECOND)
            .await
            .unwrap();
        assert_eq!(output, "hello\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure() {
        let err = execute_command("false", &[], ONE_SECOND).await.unwrap_err();
        assert!(err.to_string().starts_with("Execution failed"));
    }

    #[tokio::test]
    async fn test_unchecked_keeps_stdout_on_failure() {
        let args = vec!["-c".to_string(), "echo partial; exit 1".to_string()];
        let output = execute_command_unchecked("sh", &args, ONE_SECOND)
            .await
            .unwrap();
        assert_eq!(output, "partial\n");
    }

    #[tokio::test]
    async fn test_missing_program_is_failure() {
        let err = execute_command("definitely-not-a-real-binary", &[], ONE_SECOND)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot start"));
    }

    #[tokio::test]
    async fn test_timeout_kills_and_reports() {
        let err = execute_command("sleep", &["5".to_string()], Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("timed out after 100ms"));
    }
}
