use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

type Scale = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct RawFontSize {
    size: String,
    line_height: String,
}

#[derive(Debug, Deserialize)]
struct RawTypography {
    font_family: Scale,
    font_size: IndexMap<String, RawFontSize>,
    font_weight: Scale,
    letter_spacing: Scale,
}

#[derive(Debug, Deserialize)]
struct RawKeyframeStep {
    at: String,
    #[serde(flatten)]
    declarations: Scale,
}

#[derive(Debug, Deserialize)]
struct RawAnimation {
    duration: Scale,
    easing: Scale,
    keyframes: IndexMap<String, Vec<RawKeyframeStep>>,
}

#[derive(Debug, Deserialize)]
struct RawGlassPreset {
    background: String,
    blur: String,
    border: String,
}

#[derive(Debug, Deserialize)]
struct RawCatalogue {
    schema_version: u32,
    colors: IndexMap<String, Scale>,
    typography: RawTypography,
    border_radius: Scale,
    spacing: Scale,
    shadows: Scale,
    opacity: Scale,
    z_index: Scale,
    animation: RawAnimation,
    blur: Scale,
    glass: IndexMap<String, RawGlassPreset>,
    gradients: Scale,
    breakpoints: Scale,
}

#[derive(Debug, Clone, Serialize)]
struct Token {
    name: String,
    value: String,
}

#[derive(Debug, Clone, Serialize)]
struct TokenScale {
    name: String,
    tokens: Vec<Token>,
}

#[derive(Debug, Clone, Serialize)]
struct FontSize {
    name: String,
    size: String,
    line_height: String,
}

#[derive(Debug, Clone, Serialize)]
struct Typography {
    font_family: Vec<Token>,
    font_size: Vec<FontSize>,
    font_weight: Vec<Token>,
    letter_spacing: Vec<Token>,
}

#[derive(Debug, Clone, Serialize)]
struct KeyframeStep {
    at: String,
    declarations: Vec<Token>,
}

#[derive(Debug, Clone, Serialize)]
struct Keyframes {
    name: String,
    steps: Vec<KeyframeStep>,
}

#[derive(Debug, Clone, Serialize)]
struct Animation {
    duration: Vec<Token>,
    easing: Vec<Token>,
    keyframes: Vec<Keyframes>,
}

#[derive(Debug, Clone, Serialize)]
struct GlassPreset {
    name: String,
    background: String,
    blur: String,
    border: String,
}

#[derive(Debug, Clone, Serialize)]
struct Catalogue {
    schema_version: u32,
    colors: Vec<TokenScale>,
    typography: Typography,
    border_radius: Vec<Token>,
    spacing: Vec<Token>,
    shadows: Vec<Token>,
    opacity: Vec<Token>,
    z_index: Vec<Token>,
    animation: Animation,
    blur: Vec<Token>,
    glass: Vec<GlassPreset>,
    gradients: Vec<Token>,
    breakpoints: Vec<Token>,
}

fn non_empty<T>(source: &Path, group: &str, entries: &IndexMap<String, T>) {
    if entries.is_empty() {
        panic!("{}: token group `{group}` is empty", source.display());
    }
}

fn tokens(source: &Path, group: &str, scale: Scale) -> Vec<Token> {
    non_empty(source, group, &scale);
    scale
        .into_iter()
        .map(|(name, value)| Token { name, value })
        .collect()
}

fn keyframes(source: &Path, raw: IndexMap<String, Vec<RawKeyframeStep>>) -> Vec<Keyframes> {
    non_empty(source, "animation.keyframes", &raw);
    raw.into_iter()
        .map(|(name, steps)| {
            if steps.is_empty() {
                panic!("{}: keyframes `{name}` has no steps", source.display());
            }
            let steps = steps
                .into_iter()
                .map(|step| KeyframeStep {
                    declarations: tokens(
                        source,
                        &format!("animation.keyframes.{name} @ {}", step.at),
                        step.declarations,
                    ),
                    at: step.at,
                })
                .collect();
            Keyframes { name, steps }
        })
        .collect()
}

fn load_catalogue(source: &Path) -> Catalogue {
    let raw = fs::read_to_string(source)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", source.display()));
    let raw: RawCatalogue = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", source.display()));
    if raw.schema_version != SCHEMA_VERSION {
        panic!(
            "token schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            source.display(),
            raw.schema_version
        );
    }

    non_empty(source, "colors", &raw.colors);
    let colors = raw
        .colors
        .into_iter()
        .map(|(name, scale)| TokenScale {
            tokens: tokens(source, &format!("colors.{name}"), scale),
            name,
        })
        .collect();

    let typography = raw.typography;
    non_empty(source, "typography.font_size", &typography.font_size);
    let font_size = typography
        .font_size
        .into_iter()
        .map(|(name, entry)| FontSize {
            name,
            size: entry.size,
            line_height: entry.line_height,
        })
        .collect();

    non_empty(source, "glass", &raw.glass);
    let glass = raw
        .glass
        .into_iter()
        .map(|(name, preset)| GlassPreset {
            name,
            background: preset.background,
            blur: preset.blur,
            border: preset.border,
        })
        .collect();

    Catalogue {
        schema_version: raw.schema_version,
        colors,
        typography: Typography {
            font_family: tokens(source, "typography.font_family", typography.font_family),
            font_size,
            font_weight: tokens(source, "typography.font_weight", typography.font_weight),
            letter_spacing: tokens(source, "typography.letter_spacing", typography.letter_spacing),
        },
        border_radius: tokens(source, "border_radius", raw.border_radius),
        spacing: tokens(source, "spacing", raw.spacing),
        shadows: tokens(source, "shadows", raw.shadows),
        opacity: tokens(source, "opacity", raw.opacity),
        z_index: tokens(source, "z_index", raw.z_index),
        animation: Animation {
            duration: tokens(source, "animation.duration", raw.animation.duration),
            easing: tokens(source, "animation.easing", raw.animation.easing),
            keyframes: keyframes(source, raw.animation.keyframes),
        },
        blur: tokens(source, "blur", raw.blur),
        glass,
        gradients: tokens(source, "gradients", raw.gradients),
        breakpoints: tokens(source, "breakpoints", raw.breakpoints),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let source = crate_root.join("tokens.toml");
    println!("cargo:rerun-if-changed={}", source.display());

    let catalogue = load_catalogue(&source);
    let json = serde_json::to_string_pretty(&catalogue).expect("serialize token catalogue");
    let generated = format!(
        "/// Build-time generated design token catalogue JSON.\n\
pub const TOKEN_CATALOGUE_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("token_catalogue_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
