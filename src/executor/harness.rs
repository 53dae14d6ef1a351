//! Java test harness generation.
//!
//! Both harnesses call the single user entry point `Solution.isEvenOrOdd(int)`
//! once per test case, time the call with wall-clock millis, and compare the
//! returned string against the expected value with exact equality. They print
//! their per-case block before signaling any failure, so the parser always
//! sees complete blocks for cases that ran.

use crate::routes::TestCase;

/// JUnit 4 harness: one `@Test` method per case. Assertion failures are
/// raised only after the whole block has been printed.
pub fn junit_harness(test_cases: &[TestCase]) -> String {
    let mut source = String::from(
        "import org.junit.Test;\n\
         import org.junit.Assert;\n\
         \n\
         public class SolutionTest {\n\
         \x20   private Solution solution = new Solution();\n",
    );

    for (idx, case) in test_cases.iter().enumerate() {
        let n = idx + 1;
        let num = case.input.num;
        let expected = java_string_literal(&case.expected);
        source.push_str(&format!(
            r#"
    @Test
    public void testCase{n}() {{
        int num = {num};
        String expected = {expected};

        long startTime = System.currentTimeMillis();
        String result = solution.isEvenOrOdd(num);
        long endTime = System.currentTimeMillis();

        System.out.println("Test Case {n}:");
        System.out.println("Input: num = " + num);
        System.out.println("Expected: " + expected);
        System.out.println("Output: " + result);
        System.out.println("Execution Time: " + (endTime - startTime) + "ms");
        System.out.println("Passed: " + result.equals(expected));
        System.out.println();

        Assert.assertEquals("Test case {n} failed", expected, result);
    }}
"#
        ));
    }

    source.push('}');
    source
}

/// Framework-free fallback harness. Each case runs inside its own try/catch,
/// so an exception in the user's code reports that case and moves on.
pub fn plain_harness(test_cases: &[TestCase]) -> String {
    let total = test_cases.len();
    let mut source = format!(
        "public class SimpleTest {{\n\
         \x20   public static void main(String[] args) {{\n\
         \x20       Solution solution = new Solution();\n\
         \x20       int totalTests = {total};\n\
         \x20       int passedTests = 0;\n"
    );

    for (idx, case) in test_cases.iter().enumerate() {
        let n = idx + 1;
        let num = case.input.num;
        let expected = java_string_literal(&case.expected);
        source.push_str(&format!(
            r#"
        try {{
            int num = {num};
            String expected = {expected};

            long startTime = System.currentTimeMillis();
            String result = solution.isEvenOrOdd(num);
            long endTime = System.currentTimeMillis();

            boolean passed = result.equals(expected);
            if (passed) passedTests++;

            System.out.println("TEST_CASE_{n}:");
            System.out.println("INPUT: " + num);
            System.out.println("EXPECTED: " + expected);
            System.out.println("OUTPUT: " + result);
            System.out.println("EXECUTION_TIME: " + (endTime - startTime));
            System.out.println("PASSED: " + passed);
            System.out.println("---");
        }} catch (Exception e) {{
            System.out.println("TEST_CASE_{n}:");
            System.out.println("ERROR: " + e.getMessage());
            System.out.println("PASSED: false");
            System.out.println("---");
        }}
"#
        ));
    }

    source.push_str(
        "\n        System.out.println(\"SUMMARY: \" + passedTests + \"/\" + totalTests + \" tests passed\");\n    }\n}",
    );
    source
}

/// Quotes a string as a Java literal so expected values cannot break out of
/// the generated source.
fn java_string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
