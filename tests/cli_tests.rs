use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn game_reviews_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("game-reviews"));
    cmd.current_dir(dir.path())
        .env_remove("GAME_REVIEWS_SEED")
        .env_remove("RUST_LOG");
    cmd
}

const SEED: &str = r#"
games:
  - id: "10"
    title: Tetris
    platform: [Game Boy]
  - id: "11"
    title: Doom
    platform: [PC, SNES]
authors:
  - id: "1"
    name: Alex Kidd
    verified: true
reviews:
  - id: "1"
    rating: 10
    content: Timeless
    gameId: "10"
    authorId: "1"
  - id: "2"
    rating: 4
    content: Too dark
    gameId: "11"
    authorId: "5"
"#;

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("game-reviews"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Game"))
        .stdout(predicate::str::contains("type Review"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("input EditGameInput"));
}

#[test]
fn test_serve_on_taken_port_reports_bind_failure() {
    let temp_dir = TempDir::new().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    game_reviews_cmd(&temp_dir)
        .arg("serve")
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg(port.to_string())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Server ready").not())
        .stderr(predicate::str::contains("Failed to bind"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_builtin_games() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg("{ games { title } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Call of Duty: Modern Warfare"))
        .stdout(predicate::str::contains("Red Dead Redemption 2"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg("query($id: ID!) { game(id: $id) { title reviews { content } } }")
        .arg("--variables")
        .arg(r#"{"id": "2"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Breath of the Wild"))
        .stdout(predicate::str::contains("Great game!"));
}

#[test]
fn test_query_missing_game_is_null() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg(r#"{ game(id: "404") { title } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""game": null"#));
}

#[test]
fn test_query_invalid_field_fails() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg("{ games { rating } }")
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_query_bad_variables_fails() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg("{ games { id } }")
        .arg("--variables")
        .arg("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutate_add_game() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("mutate")
        .arg(r#"addGame(game: { title: "X", platform: ["PS5"] }) { title platform }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "X""#))
        .stdout(predicate::str::contains("PS5"));
}

#[test]
fn test_mutate_update_game() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("mutate")
        .arg(r#"updateGame(id: "1", edits: { title: "New Title" }) { title platform }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("New Title"))
        .stdout(predicate::str::contains("PS4"));
}

#[test]
fn test_mutate_delete_game() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("mutate")
        .arg(r#"deleteGame(id: "1") { title }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Call of Duty").not())
        .stdout(predicate::str::contains("Super Mario Odyssey"));
}

#[test]
fn test_mutations_do_not_persist() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("mutate")
        .arg(r#"deleteGame(id: "1") { id }"#)
        .assert()
        .success();

    game_reviews_cmd(&temp_dir)
        .arg("query")
        .arg(r#"{ game(id: "1") { title } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Call of Duty"));
}

// =============================================================================
// Seed data and configuration
// =============================================================================

#[test]
fn test_seed_flag_replaces_builtin_data() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("seed.yml"), SEED).unwrap();

    game_reviews_cmd(&temp_dir)
        .arg("--seed")
        .arg("seed.yml")
        .arg("query")
        .arg("{ games { title } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tetris"))
        .stdout(predicate::str::contains("Call of Duty").not());
}

#[test]
fn test_seed_orphaned_author_is_null() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("seed.yml"), SEED).unwrap();

    game_reviews_cmd(&temp_dir)
        .arg("--seed")
        .arg("seed.yml")
        .arg("query")
        .arg(r#"{ review(id: "2") { content author { name } } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Too dark"))
        .stdout(predicate::str::contains(r#""author": null"#));
}

#[test]
fn test_config_file_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(temp_dir.path().join("data").join("seed.yml"), SEED).unwrap();
    fs::write(
        temp_dir.path().join(".game-reviews.yml"),
        "store:\n  seed: data/seed.yml\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("sub");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = game_reviews_cmd(&temp_dir);
    cmd.current_dir(&nested)
        .arg("query")
        .arg("{ authors { name reviews { content } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Kidd"))
        .stdout(predicate::str::contains("Timeless"));
}

#[test]
fn test_missing_seed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("--seed")
        .arg("missing.yml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load seed data"));
}

#[test]
fn test_explicit_config_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    game_reviews_cmd(&temp_dir)
        .arg("--config")
        .arg("nope.yml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
