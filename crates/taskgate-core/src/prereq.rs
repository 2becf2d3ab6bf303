//! Prerequisite text parsing.
//!
//! Each task carries one free-text prerequisite line, a comma-separated list
//! of 1-based task numbers ("1, 3" means the task needs tasks 1 and 3 done
//! first). This module turns those lines into 0-based index lists, rejecting
//! malformed tokens, out-of-range references, and self-references with
//! errors that name the offending task and token.

use crate::error::GenerateError;
use std::collections::HashSet;

/// Parse the prerequisite lines for all `n` tasks.
///
/// `raw` is padded with blank lines if shorter than `n` and truncated if
/// longer; a blank line means "no prerequisites". Returns one de-duplicated
/// 0-based index list per task, in task order, or the first error
/// encountered (tasks are processed in order, tokens left to right).
pub fn parse_prereqs(raw: &[String], n: usize) -> Result<Vec<Vec<usize>>, GenerateError> {
    let mut lists = Vec::with_capacity(n);
    for task in 0..n {
        let line = raw.get(task).map(String::as_str).unwrap_or("");
        lists.push(parse_line(line, task, n)?);
    }
    Ok(lists)
}

/// Parse one task's prerequisite line. `task` is the 0-based index of the
/// task the line belongs to.
///
/// Checks run per token, fail-fast: integer parse, then range, then
/// self-reference. Duplicates are dropped, first occurrence kept.
fn parse_line(line: &str, task: usize, n: usize) -> Result<Vec<usize>, GenerateError> {
    let mut list = Vec::new();
    let mut seen = HashSet::new();

    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let reference: i64 =
            token
                .parse()
                .map_err(|_| GenerateError::MalformedPrerequisite {
                    task: task + 1,
                    token: token.to_string(),
                })?;

        if reference < 1 || reference > n as i64 {
            return Err(GenerateError::OutOfRangeReference {
                task: task + 1,
                reference,
                max: n,
            });
        }
        if reference as usize == task + 1 {
            return Err(GenerateError::SelfReference { task: task + 1 });
        }

        let index = reference as usize - 1;
        if seen.insert(index) {
            list.push(index);
        }
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    // Test 1: Blank and whitespace-only lines mean no prerequisites
    #[test]
    fn blank_lines_mean_no_prereqs() {
        let lists = parse_prereqs(&lines(&["", "   ", ","]), 3).unwrap();
        assert_eq!(lists, vec![Vec::<usize>::new(); 3]);
    }

    // Test 2: Comma-separated numbers with stray whitespace
    #[test]
    fn parses_numbers_with_whitespace() {
        let lists = parse_prereqs(&lines(&["", " 1 ,3", "1, 2"]), 3).unwrap();
        assert_eq!(lists, vec![vec![], vec![0, 2], vec![0, 1]]);
    }

    // Test 3: Duplicates removed, first occurrence order kept
    #[test]
    fn duplicates_removed_in_first_occurrence_order() {
        let lists = parse_prereqs(&lines(&["", "", "", "2,2,3,2"]), 4).unwrap();
        assert_eq!(lists[3], vec![1, 2]);
    }

    // Test 4: Short lists pad with blanks, long lists truncate
    #[test]
    fn pads_and_truncates_to_task_count() {
        let lists = parse_prereqs(&lines(&["", "1"]), 4).unwrap();
        assert_eq!(lists.len(), 4);
        assert_eq!(lists[1], vec![0]);
        assert_eq!(lists[2], Vec::<usize>::new());

        // Extra lines past the task count are ignored, even invalid ones.
        let lists = parse_prereqs(&lines(&["", "1", "bogus"]), 2).unwrap();
        assert_eq!(lists.len(), 2);
    }

    // Test 5: Non-integer token reports task and token
    #[test]
    fn malformed_token_reports_task_and_token() {
        let err = parse_prereqs(&lines(&["", "1; 2"]), 2).unwrap_err();
        match err {
            GenerateError::MalformedPrerequisite { task, token } => {
                assert_eq!(task, 2);
                assert_eq!(token, "1; 2");
            }
            other => panic!("expected MalformedPrerequisite, got {other:?}"),
        }
    }

    // Test 6: Zero, negative, and too-large references are out of range
    #[test]
    fn out_of_range_references() {
        for bad in ["0", "-3", "5"] {
            let err = parse_prereqs(&lines(&[bad, ""]), 2).unwrap_err();
            assert!(
                matches!(
                    err,
                    GenerateError::OutOfRangeReference { task: 1, max: 2, .. }
                ),
                "token {bad:?} produced {err:?}"
            );
        }
    }

    // Test 7: A task cannot require itself
    #[test]
    fn self_reference_rejected() {
        let err = parse_prereqs(&lines(&["", "", "3"]), 3).unwrap_err();
        assert!(matches!(err, GenerateError::SelfReference { task: 3 }));
    }

    // Test 8: Self reference detected even for a single task
    #[test]
    fn self_reference_on_single_task() {
        let err = parse_prereqs(&lines(&["1"]), 1).unwrap_err();
        assert!(matches!(err, GenerateError::SelfReference { task: 1 }));
    }

    // Test 9: First bad token wins; later tokens are never inspected
    #[test]
    fn fail_fast_on_first_bad_token() {
        // "99" is out of range and comes before the malformed "x".
        let err = parse_prereqs(&lines(&["99, x"]), 3).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::OutOfRangeReference { reference: 99, .. }
        ));

        // Parse failure is checked before range: "x" aborts before "99".
        let err = parse_prereqs(&lines(&["x, 99"]), 3).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedPrerequisite { .. }));
    }

    // Test 10: Valid tokens before a bad one are still checked in order
    #[test]
    fn dedup_does_not_mask_later_errors() {
        let err = parse_prereqs(&lines(&["", "", "1, 1, 99"]), 3).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::OutOfRangeReference {
                task: 3,
                reference: 99,
                max: 3
            }
        ));
    }

    // Test 11: Leading plus sign is accepted as part of integer syntax
    #[test]
    fn explicit_plus_sign_parses() {
        let lists = parse_prereqs(&lines(&["", "+1"]), 2).unwrap();
        assert_eq!(lists[1], vec![0]);
    }
}
