//! Role → color table.

use crossterm::style::Color as CtColor;
use gridpath_core::Role;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Colors used to paint each [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub none: Rgb,
    pub start: Rgb,
    pub end: Rgb,
    pub barrier: Rgb,
    pub open: Rgb,
    pub closed: Rgb,
    pub path: Rgb,
}

impl Palette {
    pub const CLASSIC: Palette = Palette {
        none: (255, 255, 255),
        start: (255, 165, 0),
        end: (64, 224, 208),
        barrier: (0, 0, 0),
        open: (0, 255, 0),
        closed: (255, 0, 0),
        path: (128, 0, 128),
    };

    pub const fn rgb(&self, role: Role) -> Rgb {
        match role {
            Role::None => self.none,
            Role::Start => self.start,
            Role::End => self.end,
            Role::Barrier => self.barrier,
            Role::Open => self.open,
            Role::Closed => self.closed,
            Role::Path => self.path,
        }
    }

    /// The color of `role` as a crossterm color.
    pub const fn color(&self, role: Role) -> CtColor {
        let (r, g, b) = self.rgb(role);
        CtColor::Rgb { r, g, b }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Single-character glyph for text output.
pub const fn glyph(role: Role) -> char {
    match role {
        Role::None => '.',
        Role::Start => 'S',
        Role::End => 'E',
        Role::Barrier => '#',
        Role::Open => 'o',
        Role::Closed => 'x',
        Role::Path => '*',
    }
}
