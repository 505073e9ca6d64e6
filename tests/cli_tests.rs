mod common;
use common::{config_path, rpb, rpb_in, sample_sheet, temp_home, temp_out, write_sheet};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

const NOW: &str = "01/06/2025 12:00";

#[test]
fn test_status_shows_current_pool() {
    let sheet = sample_sheet("status_current");

    rpb("status_current")
        .args(["--input", &sheet, "--now", NOW, "status"])
        .assert()
        .success()
        .stdout(contains("South - B2"))
        .stdout(contains("Dave"))
        .stdout(contains("Erin"))
        .stdout(contains("10%"))
        .stdout(contains("Late: took 20m vs expected 9m"))
        .stdout(contains("Past expected completion"));
}

#[test]
fn test_status_all_lists_lead_and_helpers() {
    let sheet = sample_sheet("status_all");

    rpb("status_all")
        .args(["--input", &sheet, "--now", NOW, "status", "--all"])
        .assert()
        .success()
        .stdout(contains("Frank"))
        .stdout(contains("Helper"))
        .stdout(contains("TL"));
}

#[test]
fn test_status_selected_pool() {
    let sheet = sample_sheet("status_pool");

    rpb("status_pool")
        .args(["--input", &sheet, "--now", NOW, "status", "--pool", "North - A1"])
        .assert()
        .success()
        .stdout(contains("North - A1"))
        .stdout(contains("Completed"))
        .stdout(contains("Bob"))
        .stdout(contains("Carol"));
}

#[test]
fn test_status_unknown_pool_fails() {
    let sheet = sample_sheet("status_unknown");

    rpb("status_unknown")
        .args(["--input", &sheet, "--now", NOW, "status", "-p", "East - Z9"])
        .assert()
        .failure()
        .stderr(contains("Pool not found: East - Z9"));
}

#[test]
fn test_status_without_dated_pool_shows_placeholder() {
    let sheet = write_sheet("status_undated", &["Gina,West,C3,12,,,"]);

    rpb("status_undated")
        .args(["--input", &sheet, "--now", NOW, "status"])
        .assert()
        .success()
        .stdout(contains("No active pool found"));
}

#[test]
fn test_status_warns_about_skipped_rows() {
    let sheet = write_sheet(
        "status_skipped",
        &["Alice,North,A1,10,,,01/06/2025 09:00:00", ",North,A1,5,,,"],
    );

    rpb("status_skipped")
        .args(["--input", &sheet, "--now", NOW, "status"])
        .assert()
        .success()
        .stdout(contains("1 row(s) skipped"));
}

#[test]
fn test_missing_input_is_an_error() {
    rpb("no_input")
        .args(["status"])
        .assert()
        .failure()
        .stderr(contains("No input file configured"));
}

#[test]
fn test_unreadable_input_is_an_error() {
    rpb("missing_file")
        .args(["--input", "/nonexistent/rpoolboard/sheet.csv", "status"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_now_is_rejected() {
    let sheet = sample_sheet("bad_now");

    rpb("bad_now")
        .args(["--input", &sheet, "--now", "tomorrow-ish", "status"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp: tomorrow-ish"));
}

#[test]
fn test_list_ranks_pools() {
    let sheet = sample_sheet("list_rank");

    let output = rpb("list_rank")
        .args(["--input", &sheet, "--now", NOW, "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let south = stdout.find("South - B2").expect("current pool listed");
    let north = stdout.find("North - A1").expect("previous pool listed");
    assert!(south < north, "most recent pool first:\n{stdout}");

    assert!(stdout.contains("Undated pools"));
    assert!(stdout.contains("West - C3"));
}

#[test]
fn test_list_limit_hides_older_pools() {
    let sheet = write_sheet(
        "list_limit",
        &[
            "L1,P1,T,10,,,01/06/2025 08:00:00",
            "L2,P2,T,10,,,01/06/2025 09:00:00",
            "L3,P3,T,10,,,01/06/2025 10:00:00",
        ],
    );

    rpb("list_limit")
        .args(["--input", &sheet, "--now", NOW, "list", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("P3 - T"))
        .stdout(contains("P2 - T"))
        .stdout(contains("1 older pool(s) not shown"));
}

#[test]
fn test_export_csv_all_pools() {
    let sheet = sample_sheet("export_csv");
    let out = temp_out("export_csv", "csv");

    rpb("export_csv")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("pool_id,pool_up,lead"));

    // ranked pools first, undated last
    let body: Vec<&str> = lines.collect();
    assert!(body[0].starts_with("South - B2"));
    assert!(body.iter().any(|l| l.starts_with("North - A1") && l.contains("Bob")));
    assert!(body.last().unwrap().starts_with("West - C3"));
    assert!(content.contains("Late: took 20m vs expected 9m"));
}

#[test]
fn test_export_json_dashboard() {
    let sheet = sample_sheet("export_json");
    let out = temp_out("export_json", "json");

    rpb("export_json")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["ranking"]["current"], "South - B2");
    assert_eq!(v["ranking"]["previous"][0], "North - A1");
    assert_eq!(v["pools"].as_array().unwrap().len(), 3);

    let south = &v["pools"][1];
    assert_eq!(south["state"], "InProgress");
    assert_eq!(south["past_expected_completion"], true);
    assert_eq!(south["workers"][0]["is_late"], true);
    assert_eq!(south["helpers"][0], "Frank");
}

#[test]
fn test_export_json_single_pool() {
    let sheet = sample_sheet("export_json_pool");
    let out = temp_out("export_json_pool", "json");

    rpb("export_json_pool")
        .args([
            "--input",
            &sheet,
            "--now",
            NOW,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--pool",
            "North - A1",
        ])
        .assert()
        .success();

    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let arr = v.as_array().expect("array of pools");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["pool_id"], "North - A1");
    assert_eq!(arr[0]["state"], "Completed");
}

#[test]
fn test_export_xlsx_creates_file() {
    let sheet = sample_sheet("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    rpb("export_xlsx")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_force_overwrites() {
    let sheet = sample_sheet("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").unwrap();

    rpb("export_force")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("pool_id"));
}

#[test]
fn test_export_rejects_relative_path() {
    let sheet = sample_sheet("export_relative");

    rpb("export_relative")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_unknown_extension() {
    let sheet = sample_sheet("export_ext");
    let out = temp_out("export_ext", "pdf");

    rpb("export_ext")
        .args(["--input", &sheet, "--now", NOW, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: pdf"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let home = temp_home("init_test_mode");

    rpb_in(&home)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!config_path(&home).exists());
}

#[test]
fn test_init_stores_input_for_later_commands() {
    let home = temp_home("init_input");
    let sheet = sample_sheet("init_input");

    rpb_in(&home)
        .args(["--input", &sheet, "init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));

    let saved = fs::read_to_string(config_path(&home)).expect("config written");
    assert!(saved.contains("rate_per_minute: 2.5"));

    // a second init leaves the file alone
    rpb_in(&home)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("already present"));

    rpb_in(&home)
        .args(["--now", NOW, "status"])
        .assert()
        .success()
        .stdout(contains("South - B2"));
}

#[test]
fn test_config_print_shows_defaults() {
    rpb("config_print")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("tolerance: 3.0"))
        .stdout(contains("completion_offset_minutes: 65"))
        .stdout(contains("previous_window: 9"));
}

#[test]
fn test_config_settings_change_evaluation() {
    let home = temp_home("config_settings");
    let sheet = sample_sheet("config_settings");
    fs::create_dir_all(config_path(&home).parent().unwrap()).unwrap();
    fs::write(
        config_path(&home),
        format!("input: {sheet}\ngrace_minutes: 30\ncompletion_offset_minutes: 180\n"),
    )
    .unwrap();

    let output = rpb_in(&home)
        .args(["--now", NOW, "status"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Late: took"), "grace absorbs the delay:\n{stdout}");
    assert!(!stdout.contains("Past expected completion"));
    assert!(stdout.contains("13:00"));
}

#[test]
fn test_config_check_reports_problems() {
    let home = temp_home("config_check_bad");
    fs::create_dir_all(config_path(&home).parent().unwrap()).unwrap();
    fs::write(config_path(&home), "rate_per_minute: 0\ntolerance: -1\n").unwrap();

    rpb_in(&home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stdout(contains("rate_per_minute must be a positive number"))
        .stdout(contains("tolerance must be >= 0"))
        .stderr(contains("2 problem(s) found"));
}

#[test]
fn test_config_check_accepts_defaults() {
    rpb("config_check_ok")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid."));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let home = temp_home("config_invalid");
    fs::create_dir_all(config_path(&home).parent().unwrap()).unwrap();
    fs::write(config_path(&home), "tolerance: [not, a, number]\n").unwrap();

    rpb_in(&home)
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_status_all_lists_extra_lead_rows() {
    let sheet = write_sheet(
        "status_extra_lead",
        &[
            "Early,North,A1,100,,,01/06/2025 09:00:00",
            "Second,North,A1,80,,,01/06/2025 09:30:00",
            "Bob,North,A1,50,,,",
        ],
    );

    rpb("status_extra_lead")
        .args(["--input", &sheet, "--now", NOW, "status", "--all"])
        .assert()
        .success()
        .stdout(contains("Early"))
        .stdout(contains("Second"))
        .stdout(contains("Extra lead row (ignored)"));

    // without --all only the elected lead is shown
    rpb("status_extra_lead_short")
        .args(["--input", &sheet, "--now", NOW, "status"])
        .assert()
        .success()
        .stdout(contains("Second").not());
}
