//! CLI color functions over a small kitchen-themed palette.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! internal flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{self, Stderr, Stdout};

use comanda_core::state::Connectivity;
use comanda_core::{AlertLevel, Tone};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const OCEAN: Rgb = Rgb::from_hex(0x5FA8D3); // Accent, info
const BASIL: Rgb = Rgb::from_hex(0x6A994E); // Online, success
const SAFFRON: Rgb = Rgb::from_hex(0xE9A23B); // Warning
const PAPRIKA: Rgb = Rgb::from_hex(0xC8553D); // Offline, danger
const SLATE: Rgb = Rgb::from_hex(0x6C757D); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: Stream, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

pub fn accent(text: &str) -> String {
    paint(text, Stdout, OCEAN)
}

pub fn success(text: &str) -> String {
    paint(text, Stdout, BASIL)
}

pub fn caution(text: &str) -> String {
    paint(text, Stdout, SAFFRON)
}

pub fn danger(text: &str) -> String {
    paint(text, Stdout, PAPRIKA)
}

pub fn muted(text: &str) -> String {
    paint(text, Stdout, SLATE)
}

/// Apply bold bright text (headers).
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color a panel line by its tone.
pub fn tone(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Normal => text.to_string(),
        Tone::Muted => muted(text),
        Tone::Accent => bold(&accent(text)),
        Tone::Info => accent(text),
        Tone::Success => success(text),
        Tone::Warning => caution(text),
        Tone::Danger => danger(text),
    }
}

pub fn alert(level: AlertLevel, text: &str) -> String {
    match level {
        AlertLevel::Success => success(text),
        AlertLevel::Info => accent(text),
        AlertLevel::Warning => caution(text),
        AlertLevel::Danger => danger(text),
    }
}

pub fn connectivity(state: Connectivity, text: &str) -> String {
    match state {
        Connectivity::Checking => muted(text),
        Connectivity::Online => success(text),
        Connectivity::Offline => danger(text),
    }
}

/// Apply error styling (for stderr messages).
pub fn error(text: &str) -> String {
    paint(text, Stderr, PAPRIKA)
}

/// Apply warning styling (for stderr messages).
pub fn warning(text: &str) -> String {
    paint(text, Stderr, SAFFRON)
}

/// Apply hint styling (secondary info on stderr).
pub fn hint(text: &str) -> String {
    paint(text, Stderr, SLATE)
}
