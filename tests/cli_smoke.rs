use std::process::Command;

fn run(args: &[&str]) -> serde_json::Value {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "battleship", "--"])
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run battleship binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn demo_binary_smoke() {
    let v = run(&["demo", "--seed", "1"]);
    let fleets = v["fleets"].as_array().unwrap();
    assert_eq!(fleets.len(), 2);
    assert!(fleets.iter().all(|f| f.as_array().unwrap().len() == 5));
    assert_eq!(run(&["demo", "--seed", "1"]), v);
}

#[test]
fn replay_binary_records_nothing_unfinished() {
    let dir = std::env::temp_dir().join(format!("battleship-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let script = dir.join("script.json");
    std::fs::write(
        &script,
        r#"[{"command": "set_game_status", "status": "configuring"},
            {"command": "add_ship", "player": 0, "ship_type_id": 3, "direction": "right",
             "anchor": {"x": 0, "y": 0}}]"#,
    )
    .unwrap();
    let board = dir.join("scores.json");
    let v = run(&[
        "--scoreboard",
        board.to_str().unwrap(),
        "replay",
        script.to_str().unwrap(),
    ]);
    assert_eq!(v["status"], "configuring");
    assert_eq!(v["recorded"], false);
    assert_eq!(v["outcomes"][1]["ship_id"], 1);
    std::fs::remove_dir_all(&dir).unwrap();
}
