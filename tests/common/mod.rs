//! Shared test fixtures.

#![allow(dead_code)]

pub mod mock_server;

use std::path::PathBuf;

use tempfile::TempDir;
use userdesk::config::{Config, SourceConfig};
use userdesk::model::{Company, User, UserId};

pub fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id: UserId::Number(id),
        name: name.to_string(),
        email: email.to_string(),
        company: Company::new("Acme"),
        phone: None,
        website: None,
    }
}

/// The two-user collection used throughout the behavioural examples.
pub fn bob_and_amy() -> Vec<User> {
    vec![user(1, "Bob", "b@x.com"), user(2, "Amy", "a@x.com")]
}

/// Source config pointing at `url` with short timeouts and fast retries.
pub fn source_config(url: &str) -> SourceConfig {
    SourceConfig {
        url: url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        max_retries: 1,
        retry_backoff_base_ms: 10,
    }
}

pub fn test_config(url: &str) -> Config {
    Config {
        source: source_config(url),
        ..Config::default()
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub const REMOTE_USERS: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org",
    "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net" }
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "phone": "010-692-6593 x09125",
    "website": "anastasia.net",
    "company": { "name": "Deckow-Crist" }
  },
  {
    "id": 3,
    "name": "Clementine Bauch",
    "username": "Samantha",
    "email": "Nathan@yesenia.net",
    "company": { "name": "Romaguera-Jacobson" }
  }
]"#;
