use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    env::var("MARKETBRIEF_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    tracing::info!(path = %path.display(), "recorded fixture");
    Ok(())
}
