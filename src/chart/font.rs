use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::MarketError;

/// Environment variable pointing at a `.ttf`/`.otf` file used for chart text.
pub const FONT_ENV_VAR: &str = "MARKETBRIEF_FONT";

/// DejaVu Sans, used when no system font can be loaded.
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Where the registered chart font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A file from `MARKETBRIEF_FONT` or a system font directory.
    File(PathBuf),
    /// The copy of DejaVu Sans compiled into the binary.
    Bundled,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Bundled => f.write_str("bundled DejaVu Sans"),
        }
    }
}

static REGISTERED: OnceLock<Result<FontSource, String>> = OnceLock::new();

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(p) = std::env::var(FONT_ENV_VAR)
        && !p.trim().is_empty()
    {
        paths.push(PathBuf::from(p));
    }
    paths.extend(CANDIDATES.iter().map(PathBuf::from));
    paths
}

fn try_register(path: &Path) -> Result<(), String> {
    let bytes = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    // plotters keeps a `'static` reference; the font lives for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font("sans-serif", FontStyle::Normal, bytes)
        .map_err(|_| format!("{}: not a usable font", path.display()))
}

/// Registers a sans-serif font with plotters, once per process.
///
/// `MARKETBRIEF_FONT` wins, then common system locations, then the bundled DejaVu Sans.
///
/// # Errors
///
/// Returns [`MarketError::Chart`] only if the bundled font itself is rejected.
pub fn ensure_font() -> Result<FontSource, MarketError> {
    REGISTERED
        .get_or_init(|| {
            for path in candidate_paths() {
                if !path.is_file() {
                    continue;
                }
                match try_register(&path) {
                    Ok(()) => {
                        tracing::debug!(font = %path.display(), "registered chart font");
                        return Ok(FontSource::File(path));
                    }
                    Err(e) => tracing::debug!(error = %e, "skipping font"),
                }
            }
            register_font("sans-serif", FontStyle::Normal, BUNDLED_FONT)
                .map_err(|_| "bundled font could not be loaded".to_string())?;
            tracing::debug!("registered bundled chart font");
            Ok(FontSource::Bundled)
        })
        .clone()
        .map_err(MarketError::Chart)
}
