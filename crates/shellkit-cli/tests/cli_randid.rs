use assert_cmd::Command;

#[allow(deprecated)]
fn randid_cmd() -> Command {
    Command::cargo_bin("randid").unwrap()
}

fn id_line(columns: Option<&str>) -> String {
    let mut cmd = randid_cmd();
    match columns {
        Some(c) => cmd.env("COLUMNS", c),
        None => cmd.env_remove("COLUMNS"),
    };
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_width_follows_columns() {
    let out = id_line(Some("40"));
    assert!(out.ends_with('\n'));
    let id = out.trim_end_matches('\n');
    assert_eq!(id.len(), 39);
    assert!(id.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_minimum_length_is_one() {
    let out = id_line(Some("1"));
    assert_eq!(out.trim_end_matches('\n').len(), 1);
}

#[test]
fn test_falls_back_to_eighty_columns_when_piped() {
    let out = id_line(None);
    assert_eq!(out.trim_end_matches('\n').len(), 79);
}

#[test]
fn test_columns_flag() {
    randid_cmd()
        .env_remove("COLUMNS")
        .args(["--columns", "11"])
        .assert()
        .success()
        .stdout(predicates::function::function(|s: &str| {
            s.trim_end().len() == 10
        }));
}
