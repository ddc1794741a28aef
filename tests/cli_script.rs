mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::Path;

fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallet_core_cli").unwrap();
    cmd.env("WALLET_CORE_HOME", home)
        .env("WALLET_CORE_CLI_SCRIPT", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = common::temp_base();
    let input = "lang en\n\
                 login erdener Bee2508\n\
                 add-income Salary 10000 --date 2024-03-01\n\
                 add-expense Food 2000\n\
                 summary\n\
                 exit\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Logged in."))
        .stdout(contains("Record added"))
        .stdout(contains("10,000 TL"));

    let stored = std::fs::read_to_string(home.join("store/financial_incomes.json")).unwrap();
    assert!(stored.contains("\"Salary\""));
}

#[test]
fn finance_commands_are_gated() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("summary\n")
        .assert()
        .success()
        .stdout(contains("Bu işlem için giriş yapmalısınız."));
}

#[test]
fn first_run_greets_once() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(contains("Hoş Geldiniz"));
    cli(&home)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(contains("Hoş Geldiniz").not());
}

#[test]
fn one_shot_arguments_run_a_single_command() {
    let home = common::temp_base();
    cli(&home)
        .env_remove("WALLET_CORE_CLI_SCRIPT")
        .args(["t", "report.title"])
        .assert()
        .success()
        .stdout(contains("Finansal Rapor"));
}

#[test]
fn one_shot_failure_exits_non_zero() {
    let home = common::temp_base();
    cli(&home)
        .env_remove("WALLET_CORE_CLI_SCRIPT")
        .arg("summary")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Bu işlem için giriş yapmalısınız."))
        .stderr(contains("Command `summary` failed"));

    cli(&home)
        .env_remove("WALLET_CORE_CLI_SCRIPT")
        .arg("sumary")
        .assert()
        .failure()
        .stderr(contains("Unknown command `sumary`"));
}

#[test]
fn unknown_command_suggests_nearest() {
    let home = common::temp_base();
    cli(&home)
        .write_stdin("sumary\n")
        .assert()
        .success()
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn export_pdf_writes_report_file() {
    let home = common::temp_base();
    let out = home.join("out");
    let input = format!(
        "login erdener Bee2508\nadd-fixed Kira 9500\nexport-pdf {}\n",
        out.display()
    );
    cli(&home).write_stdin(input).assert().success().stdout(contains("Rapor kaydedildi"));

    let written: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("finansal-rapor-"));
    assert!(written[0].ends_with(".pdf"));
}
