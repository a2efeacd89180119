use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::MockServer;

/// API key the mock catalog expects.
pub const TEST_API_KEY: &str = "test-key";

/// Catalog base URL for a mock server.
pub fn catalog_url(server: &MockServer) -> String {
    format!("{}/3/", server.uri())
}

/// Poster base URL for a mock server.
pub fn image_url(server: &MockServer) -> String {
    format!("{}/t/p/", server.uri())
}

/// The single-movie response used across scenarios.
pub fn test_movie_response() -> serde_json::Value {
    json!({
        "results": [{
            "title": "Test Movie",
            "release_date": "2020-01-15",
            "poster_path": "/abc.jpg",
            "vote_average": 7.5,
            "overview": "A test plot."
        }]
    })
}

/// Write a raw preferences file where the CLI run with `home` will look for it.
pub fn write_preferences(home: &Path, contents: &str) {
    let dir = home.join("config").join("marquee");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    std::fs::write(dir.join("preferences.json"), contents).expect("Failed to write preferences");
}

/// Run the CLI with an isolated HOME and the catalog pointed at `catalog`.
pub fn run_cli_with_env(args: &[&str], home: &Path, catalog: &str, images: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("MARQUEE_API_KEY", TEST_API_KEY);
    cmd.env("MARQUEE_CATALOG_URL", catalog);
    cmd.env("MARQUEE_IMAGE_URL", images);
    cmd.env("LANG", "en_US.UTF-8");
    cmd.env("NO_COLOR", "1");
    for var in ["LC_ALL", "LC_TIME", "MARQUEE_LOCALE", "COLUMNS", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Same as [`run_cli_with_env`], off the async runtime's worker threads.
pub async fn run_cli_async(args: &[&str], home: &Path, catalog: &str, images: &str) -> Output {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let home = home.to_path_buf();
    let catalog = catalog.to_string();
    let images = images.to_string();

    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_env(&args, &home, &catalog, &images)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
