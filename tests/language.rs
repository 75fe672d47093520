use std::fs;

use calx::{config::Config, error::Error, run_script};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "calx"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_script(&script, &Config::default()) {
            panic!("Demo script {path:?} failed:\n{script}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn result(src: &str) -> Option<String> {
    run_script(src, &Config::default()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_success(src: &str) {
    if let Err(e) = run_script(src, &Config::default()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src, &Config::default()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn last_value_is_returned() {
    assert_eq!(result("1 + 1"), Some("2".to_string()));
    assert_eq!(result("let(x, 2); x * 3"), Some("6".to_string()));
    assert_eq!(result("let(x, 2)"), None);
    assert_eq!(result(""), None);
    assert_eq!(result("1\nprintln(5)\n"), Some("1".to_string()));
}

#[test]
fn bindings_carry_across_lines() {
    assert_eq!(result("let(x, 4)\n\nlet(y, x + 1)\nx * y"), Some("20".to_string()));
}

#[test]
fn quit_stops_the_script() {
    assert_eq!(result("1\nquit()\n1 / 0"), Some("1".to_string()));
    assert_eq!(result("2; exit(); 1 / 0"), Some("2".to_string()));
}

#[test]
fn precision_follows_the_config() {
    let config = Config { precision: Some(4),
                          ..Config::default() };
    assert_eq!(run_script("pi", &config).unwrap(), Some("3.142".to_string()));
}

#[test]
fn assertions_succeed_and_fail() {
    assert_success("1 + 1 = 2");
    assert_success("let(f, func(x, 2x))\nf(4) = 8");
    assert_failure("1 + 1 = 3");
    assert_failure("[1, 2] = [2, 1]");
}

#[test]
fn errors_are_reported() {
    assert_failure("1 / 0");
    assert_failure("3 < (1 + 2i)");
    assert_failure("undefined_name");
    assert_failure("let(sqrt, 2)");
    assert_failure("[1, 2].2");
    assert_failure("1 + 1\n2 +");
    assert_failure("||");

    assert!(matches!(run_script("2 +", &Config::default()), Err(Error::Parse(_))));
    assert!(matches!(run_script("1 / 0", &Config::default()), Err(Error::Runtime(_))));
}

#[test]
fn first_error_wins() {
    let Err(error) = run_script("zz\n1 / 0", &Config::default()) else {
        panic!("Script succeeded but was expected to fail");
    };
    assert_eq!(error.to_string(), "Runtime error: Unknown variable 'zz'.");
}
