//! Color Constants for the Clinical Theme
//!
//! Light, clinical blue/white scheme. Risk chip colors map one-to-one
//! onto risk severities.

use eframe::egui::Color32;

/// Top navigation bar background - Deep blue
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1A, 0x4F, 0x8B);

/// Main panel background - Off-white
pub const PANEL_BG: Color32 = Color32::from_rgb(0xF7, 0xF9, 0xFB);

/// Card background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Light gray
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD5, 0xDC, 0xE3);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF6, 0xFA);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x20, 0x2A, 0x33);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x77, 0x83);

/// Accent color for primary actions
pub const ACCENT: Color32 = Color32::from_rgb(0x2D, 0x6C, 0xB5);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xEF, 0x6C, 0x00);

/// Info color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x02, 0x77, 0xBD);

/// Risk chip: no risk detected
pub const RISK_NONE: Color32 = SUCCESS;

/// Risk chip: borderline
pub const RISK_BORDERLINE: Color32 = INFO;

/// Risk chip: early onset
pub const RISK_EARLY_ONSET: Color32 = WARNING;

/// Risk chip: in danger, the highest severity
pub const RISK_IN_DANGER: Color32 = ERROR;
