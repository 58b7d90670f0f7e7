// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (thread red scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.92, 0.45, 0.40);
    pub const PRIMARY_500: Color = Color::from_rgb(0.85, 0.33, 0.28);
    pub const PRIMARY_600: Color = Color::from_rgb(0.72, 0.26, 0.22);

    // Quilt cell hues, cycled by cell identifier
    pub const CELL_HUES: [Color; 6] = [
        Color::from_rgb(0.85, 0.33, 0.28),
        Color::from_rgb(0.93, 0.68, 0.31),
        Color::from_rgb(0.38, 0.55, 0.42),
        Color::from_rgb(0.30, 0.42, 0.58),
        Color::from_rgb(0.55, 0.38, 0.52),
        Color::from_rgb(0.88, 0.84, 0.76),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side length of one block tile in the gallery grid.
    pub const BLOCK_TILE: f32 = 180.0;
    /// Side length of the preview grid inside the modal.
    pub const PREVIEW_TILE: f32 = 240.0;
    /// Maximum width of the modal sheet.
    pub const MODAL_SHEET_WIDTH: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY_SM: f32 = 13.0;
    pub const BODY_MD: f32 = 15.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_LG: f32 = 30.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}
