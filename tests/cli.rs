//! End-to-end tests for the fuzzy-compare binary

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fuzzy_compare() -> Command {
    cargo_bin_cmd!("fuzzy-compare")
}

mod distance {
    use super::*;

    #[test]
    fn prints_damerau_distance() {
        fuzzy_compare()
            .args(["distance", "honda", "ohnda"])
            .assert()
            .success()
            .stdout("1\n");
    }

    #[test]
    fn is_case_sensitive_by_default() {
        fuzzy_compare()
            .args(["distance", "I'm Done", "i'm done"])
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn ignore_case_folds_first() {
        fuzzy_compare()
            .args(["distance", "--ignore-case", "I'm Done", "i'm done"])
            .assert()
            .success()
            .stdout("0\n");
    }

    #[test]
    fn metric_selects_levenshtein() {
        fuzzy_compare()
            .args(["distance", "honda", "ohnda", "--metric", "levenshtein"])
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn unknown_metric_fails() {
        fuzzy_compare()
            .args(["distance", "honda", "ohnda", "--metric", "jaro"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown metric"));
    }

    #[test]
    fn json_output() {
        fuzzy_compare()
            .args(["--json", "distance", "tickets", "ticket"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"distance\": 1"))
            .stdout(predicate::str::contains("\"metric\": \"damerau_levenshtein\""))
            .stdout(predicate::str::contains("\"ignore_case\": false"));
    }
}

mod similarity {
    use super::*;

    #[test]
    fn prints_score() {
        fuzzy_compare()
            .args(["similarity", "Done", "don"])
            .assert()
            .success()
            .stdout("0.7500\n");
    }

    #[test]
    fn json_output() {
        fuzzy_compare()
            .args(["--json", "similarity", "Done", "don"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"similarity\": 0.75"));
    }

    #[test]
    fn cjk_input() {
        fuzzy_compare()
            .args(["similarity", "查看门票", "成为门票"])
            .assert()
            .success()
            .stdout("0.5000\n");
    }
}

mod matrix {
    use super::*;

    #[test]
    fn prints_table() {
        fuzzy_compare()
            .args(["matrix", "ab", "ba"])
            .assert()
            .success()
            .stdout("\t\tb\ta\n\t0\t1\t2\na\t1\t1\t1\nb\t2\t1\t1\n\n1\n");
    }

    #[test]
    fn json_output() {
        fuzzy_compare()
            .args(["--json", "matrix", "ab", "ba"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"cells\""))
            .stdout(predicate::str::contains("\"distance\": 1"))
            .stdout(predicate::str::contains("\"source\": \"ab\""));
    }
}

#[test]
fn missing_subcommand_fails() {
    fuzzy_compare().assert().failure();
}
