mod command;
mod harness;
mod parser;
mod workspace;

pub use command::{execute_command, execute_command_unchecked};
pub use harness::{junit_harness, plain_harness};
pub use parser::{JUNIT_MARKERS, MarkerSet, NO_OUTPUT, PLAIN_MARKERS, parse_output};
pub use workspace::Workspace;

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::ExecutionConfig;
use crate::routes::{CaseResult, TestCase};

// The harness classes refer to `Solution` by name, so the file names inside
// the workspace are fixed.
const SOLUTION_FILE: &str = "Solution.java";
const JUNIT_TEST_FILE: &str = "SolutionTest.java";
const PLAIN_TEST_FILE: &str = "SimpleTest.java";

/// Runs the full pipeline for one submission: workspace, harness, compile,
/// run, parse. The workspace is removed on every exit path.
///
/// A harness compilation failure (typically the JUnit jars missing from the
/// host) switches to the framework-free fallback harness; every other
/// compile or run failure aborts the request with its diagnostic.
pub async fn run_submission(
    code: &str,
    test_cases: &[TestCase],
    config: &ExecutionConfig,
) -> Result<Vec<CaseResult>> {
    let time_limit = Duration::from_millis(config.timeout_ms);
    let workspace = Workspace::create().context("Failed to create workspace")?;
    let work_dir = workspace.path().display().to_string();

    workspace.write_file(SOLUTION_FILE, code)?;
    workspace.write_file(JUNIT_TEST_FILE, &junit_harness(test_cases))?;

    // The submitted solution must compile; a failure here is terminal.
    execute_command(
        "javac",
        &[
            "-d".to_string(),
            work_dir.clone(),
            workspace.path().join(SOLUTION_FILE).display().to_string(),
        ],
        time_limit,
    )
    .await?;

    let junit_classpath = join_classpath(&[
        ".",
        &work_dir,
        &config.junit_jar,
        &config.hamcrest_jar,
    ]);

    let harness_compiled = execute_command(
        "javac",
        &[
            "-cp".to_string(),
            junit_classpath.clone(),
            workspace.path().join(JUNIT_TEST_FILE).display().to_string(),
        ],
        time_limit,
    )
    .await;

    let results = match harness_compiled {
        Ok(_) => {
            // JUnitCore exits non-zero when any test fails; failed cases are
            // still reported per block, so the exit status is not checked.
            let output = execute_command_unchecked(
                "java",
                &[
                    "-cp".to_string(),
                    junit_classpath,
                    "org.junit.runner.JUnitCore".to_string(),
                    "SolutionTest".to_string(),
                ],
                time_limit,
            )
            .await?;
            parse_output(&output, test_cases.len(), &JUNIT_MARKERS)
        }
        Err(e) => {
            log::warn!("JUnit harness unavailable, falling back to plain runner: {e}");

            workspace.write_file(PLAIN_TEST_FILE, &plain_harness(test_cases))?;
            execute_command(
                "javac",
                &[
                    "-cp".to_string(),
                    work_dir.clone(),
                    workspace.path().join(PLAIN_TEST_FILE).display().to_string(),
                ],
                time_limit,
            )
            .await?;

            let output = execute_command(
                "java",
                &[
                    "-cp".to_string(),
                    work_dir,
                    "SimpleTest".to_string(),
                ],
                time_limit,
            )
            .await?;
            parse_output(&output, test_cases.len(), &PLAIN_MARKERS)
        }
    };

    Ok(results)
}

fn join_classpath(entries: &[&str]) -> String {
    let separator = if cfg!(windows) { ";" } else { ":" };
    entries.join(separator)
}
