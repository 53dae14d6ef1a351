use std::collections::HashMap;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::routes::{TestCase, TestInput};

#[derive(Parser)]
#[command(name = "minijudge", version = "1.0", about, long_about = None)]
pub struct CliArgs {
    /// Path to the configuration file; built-in defaults are used when omitted
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<String>,
}

impl CliArgs {
    /// Load the configuration from the specified file, or the defaults
    pub fn to_config(&self) -> std::io::Result<Config> {
        match &self.config_path {
            Some(path) => {
                let file = std::fs::File::open(path)?;
                let reader = std::io::BufReader::new(file);
                serde_json::from_reader(reader).map_err(|e| e.into())
            }
            None => Ok(Config::default()),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub execution: ExecutionConfig,
    pub problems: Vec<ProblemDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            execution: ExecutionConfig::default(),
            problems: vec![even_or_odd_problem()],
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ServerConfig {
    pub bind_address: Option<String>,
    pub bind_port: Option<u16>,
    /// Directory holding the static collaborator pages
    pub public_dir: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Wall-clock budget for each subprocess invocation, in milliseconds
    pub timeout_ms: u64,
    /// JUnit jar path, resolved relative to the process working directory
    pub junit_jar: String,
    /// Hamcrest jar path, resolved relative to the process working directory
    pub hamcrest_jar: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            junit_jar: "lib/junit-4.13.2.jar".to_string(),
            hamcrest_jar: "lib/hamcrest-core-1.3.jar".to_string(),
        }
    }
}

/// A problem as served to the editor page: starter templates per language
/// plus the canonical test cases. Handlers receive this through `web::Data`;
/// nothing about a problem lives in mutable state.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDefinition {
    pub id: String,
    pub name: String,
    pub templates: HashMap<String, String>,
    pub test_cases: Vec<TestCase>,
}

const JAVA_TEMPLATE: &str = r#"public class Solution {
    public String isEvenOrOdd(int num) {
        // Your code here
        // Return "Even" if the number is even, "Odd" if it's odd
        if (num % 2 == 0) {
            return "Even";
        } else {
            return "Odd";
        }
    }
}"#;

fn even_or_odd_problem() -> ProblemDefinition {
    let case = |num: i32, expected: &str, description: &str| TestCase {
        input: TestInput { num },
        expected: expected.to_string(),
        description: Some(description.to_string()),
    };

    ProblemDefinition {
        id: "even-odd".to_string(),
        name: "Even or Odd".to_string(),
        templates: HashMap::from([("java".to_string(), JAVA_TEMPLATE.to_string())]),
        test_cases: vec![
            case(2, "Even", "Even number: 2"),
            case(3, "Odd", "Odd number: 3"),
            case(0, "Even", "Zero is even: 0"),
            case(-4, "Even", "Negative even number: -4"),
            case(-7, "Odd", "Negative odd number: -7"),
            case(100, "Even", "Large even number: 100"),
            case(99, "Odd", "Large odd number: 99"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.execution.timeout_ms, 10_000);
        assert_eq!(config.problems.len(), 1);

        let problem = &config.problems[0];
        assert_eq!(problem.id, "even-odd");
        assert_eq!(problem.test_cases.len(), 7);
        assert!(problem.templates.contains_key("java"));
        assert_eq!(problem.test_cases[3].input.num, -4);
        assert_eq!(problem.test_cases[3].expected, "Even");
    }

    #[test]
    fn test_config_deserialization() {
        let raw = r#"{
            "server": { "bind_address": "0.0.0.0", "bind_port": 8080 },
            "execution": { "timeout_ms": 5000 },
            "problems": [{
                "id": "even-odd",
                "name": "Even or Odd",
                "templates": { "java": "public class Solution {}" },
                "testCases": [
                    { "input": { "num": 2 }, "expected": "Even" }
                ]
            }]
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.server.bind_address, Some("0.0.0.0".to_string()));
        assert_eq!(config.server.bind_port, Some(8080));
        assert_eq!(config.execution.timeout_ms, 5000);
        // omitted fields fall back to defaults
        assert_eq!(config.execution.junit_jar, "lib/junit-4.13.2.jar");
        assert_eq!(config.problems[0].test_cases[0].expected, "Even");
        assert!(config.problems[0].test_cases[0].description.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.problems.len(), 1);
        assert_eq!(config.execution.timeout_ms, 10_000);
    }
}
