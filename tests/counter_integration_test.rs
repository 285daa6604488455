use loop_drills::{run_counter, DrillError, IoConsole, Tally};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with(input: &str) -> (loop_drills::Result<Tally>, String) {
    let mut console = IoConsole::new(input.as_bytes(), Vec::new());
    let result = run_counter(&mut console);
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

fn lines(values: &[i32]) -> String {
    values.iter().map(|v| format!("{}\n", v)).collect()
}

#[test]
fn test_one_to_ten_is_five_and_five() {
    let (result, output) = run_with(&lines(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    assert_eq!(result.unwrap(), Tally { even: 5, odd: 5 });
    assert!(output.contains("Number of Even numbers: 5\n"));
    assert!(output.contains("Number of Odd numbers: 5\n"));
}

#[test]
fn test_all_evens() {
    let (result, output) = run_with(&lines(&[2, 4, 6, 8, 10, 12, 14, 16, 18, 20]));
    assert_eq!(result.unwrap(), Tally { even: 10, odd: 0 });
    assert!(output.contains("عدد الأرقام الزوجية: 10\n"));
    assert!(output.contains("عدد الأرقام الفردية: 0\n"));
}

#[test]
fn test_full_transcript() {
    let (result, output) = run_with(&lines(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    assert!(result.is_ok());

    let mut expected =
        String::from("Please enter 10 integer numbers:\nمن فضلك أدخل 10 أرقام صحيحة:\n");
    for position in 1..=10 {
        expected.push_str(&format!("Enter number {}: ", position));
    }
    expected.push_str(
        "\n===== Results / النتائج =====\n\
         Number of Even numbers: 5\n\
         عدد الأرقام الزوجية: 5\n\
         Number of Odd numbers: 5\n\
         عدد الأرقام الفردية: 5\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_bad_input_at_every_position_is_fatal() {
    for bad_at in 0..10 {
        let mut input: Vec<String> = (1..=10).map(|v| v.to_string()).collect();
        input[bad_at] = "abc".to_string();
        let (result, output) = run_with(&(input.join("\n") + "\n"));

        match result {
            Err(DrillError::ParseError { position, .. }) => assert_eq!(position, bad_at + 1),
            other => panic!("expected parse error at {}, got {:?}", bad_at + 1, other),
        }
        assert!(!output.contains("Results"));
    }
}

fn run_counter_binary(stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_counter"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_counter_binary_reports_counts() {
    let output = run_counter_binary(lines(&[-4, -3, 0, 11, 12, 13, 14, 15, 16, 17]).as_bytes());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Number of Even numbers: 5\n"));
    assert!(stdout.contains("Number of Odd numbers: 5\n"));
}

#[test]
fn test_counter_binary_fails_on_non_integer() {
    let output = run_counter_binary(b"1\n2\nabc\n4\n5\n6\n7\n8\n9\n10\n");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Results"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not a valid integer"));
}

#[test]
fn test_counter_binary_fails_on_truncated_input() {
    let output = run_counter_binary(b"1\n2\n");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Enter number 3: "));
    assert!(!stdout.contains("Results"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input closed after 2"));
}

#[test]
fn test_counter_binary_treats_invalid_utf8_as_bad_number() {
    let output = run_counter_binary(b"1\n\xff\n3\n4\n5\n6\n7\n8\n9\n10\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Results"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Number 2"));
}
