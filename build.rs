use std::env;
use std::fs;
use std::path::Path;

// Claves que lee `AppConfig::from_env()` vía option_env!
const CONFIG_KEYS: &[&str] = &[
    "API_URL",
    "API_TIMEOUT_MS",
    "SUPPORT_EMAIL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TELEGRAM_SCRIPT_URL",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using AppConfig defaults.");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"').trim_matches('\'');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        // Una variable del entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
