/// Builds the instruction sent to the model for a commit message.
///
/// `files` is the newline separated list of staged files, `diff` the staged diff.
pub fn build_commit_prompt(files: &str, diff: &str) -> String {
    format!(
        r#"Generate a conventional commit message for the following staged changes.

Use the format: <type>: <description>

Types:
- feat: a new feature
- fix: a bug fix
- docs: documentation only changes
- style: formatting, missing semicolons, etc. (no code change)
- refactor: a code change that neither fixes a bug nor adds a feature
- perf: a code change that improves performance
- test: adding or correcting tests
- build: changes to the build system or dependencies
- ci: changes to CI configuration
- chore: other changes that don't modify src or test files
- revert: reverts a previous commit

Guidelines:
- Use the imperative mood ("add" not "added" or "adds")
- Use lowercase for the description
- Do not end the description with a period
- Maximum 50 characters
- Pick the single type that best describes the change

Respond with the commit message only, on a single line, without quotes or explanation.

Staged files:
{files}

Diff:
{diff}"#,
        files = files.trim_end(),
        diff = diff,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_guidelines_and_input() {
        let files = "main.rs\nlib.rs";
        let diff = "diff --git a/main.rs b/main.rs";
        let prompt = build_commit_prompt(files, diff);

        for expected in [
            "conventional commit message",
            "<type>: <description>",
            "feat:",
            "fix:",
            "docs:",
            "imperative mood",
            "lowercase",
            "period",
            "Maximum 50 characters",
            files,
            diff,
        ] {
            assert!(prompt.contains(expected), "prompt missing {:?}", expected);
        }
    }

    #[test]
    fn test_prompt_puts_diff_last() {
        let prompt = build_commit_prompt("x\n", "diff --git a/x");
        assert!(prompt.ends_with("Diff:\ndiff --git a/x"));
        assert!(prompt.contains("Staged files:\nx\n\nDiff:"));
    }
}
