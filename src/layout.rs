// src/layout.rs
//
// Hero grid layout text for the client's `fulldeck_layout.txt` import.
//
// Placement walks a cursor left to right, top to bottom. A row wraps once the
// column counter exceeds `columns`, so each row holds `columns + 1` icons.
// Existing layouts depend on that count; keep it.

use std::{fmt, fmt::Write as _, str::FromStr};

use crate::{catalog::Entity, error::LayoutError, rank::RankedList};

pub const LAYOUT_NAME: &str = "fulldeck_layout.txt";
pub const ZPOS: i32 = 100;

/// Icon placement constants for one screen aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGeometry {
    pub scale: f64,
    pub start_x: i32,
    pub start_y: i32,
    pub icon_w: i32,
    pub icon_h: i32,
    pub columns: usize,
}

const WIDE: LayoutGeometry = LayoutGeometry {
    scale: 0.390228,
    start_x: 0,
    start_y: 51,
    icon_w: 51,
    icon_h: 51,
    columns: 19,
};

const STANDARD: LayoutGeometry = LayoutGeometry {
    scale: 0.34848,
    start_x: 0,
    start_y: 50,
    icon_w: 55,
    icon_h: 55,
    columns: 20,
};

const TALL: LayoutGeometry = LayoutGeometry {
    scale: 0.390228,
    start_x: 0,
    start_y: 54,
    icon_w: 54,
    icon_h: 54,
    columns: 20,
};

/// The supported aspect ratios. No others are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Ratio {
    /// 16:9
    #[default]
    Wide,
    /// 4:3
    Standard,
    /// 16:10
    Tall,
}

impl Ratio {
    pub const ALL: [Ratio; 3] = [Ratio::Wide, Ratio::Standard, Ratio::Tall];

    pub fn as_str(self) -> &'static str {
        match self {
            Ratio::Wide => "16:9",
            Ratio::Standard => "4:3",
            Ratio::Tall => "16:10",
        }
    }

    pub fn geometry(self) -> &'static LayoutGeometry {
        match self {
            Ratio::Wide => &WIDE,
            Ratio::Standard => &STANDARD,
            Ratio::Tall => &TALL,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ratio {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ratio::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| LayoutError::UnknownGeometry(s!(s)))
    }
}

/// Preset by name ("16:9", "4:3", "16:10").
pub fn preset(name: &str) -> Result<&'static LayoutGeometry, LayoutError> {
    name.parse::<Ratio>().map(Ratio::geometry)
}

/// One placed icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub slot: usize,
    pub hero_id: u32,
    pub x: i32,
    pub y: i32,
    pub scale: f64,
    pub z: i32,
}

/// Place `heroes` in order, one cell each.
pub fn cells<'a, I>(heroes: I, geo: &LayoutGeometry) -> Vec<GridCell>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let (mut col, mut x, mut y) = (0usize, geo.start_x, geo.start_y);
    let mut out = Vec::new();

    for (slot, hero) in heroes.into_iter().enumerate() {
        out.push(GridCell { slot, hero_id: hero.id, x, y, scale: geo.scale, z: ZPOS });

        col += 1;
        if col > geo.columns {
            // Row full: back to the first column, one row down
            col = 0;
            x = geo.start_x;
            y += geo.icon_h;
        } else {
            x += geo.icon_w;
        }
    }
    out
}

/// Serialize cells as the client's KeyValues text. Tab-indented, `\n`
/// separated, no trailing newline.
pub fn render(cells: &[GridCell]) -> String {
    let mut out = String::with_capacity(64 + cells.len() * 96);
    let _ = write!(out, "\"{LAYOUT_NAME}\"\n{{");
    for c in cells {
        let _ = write!(
            out,
            "\n\t\"{}\"\n\t{{\n\t\t\"HeroID\"\t\"{}\"\n\t\t\"x\"\t\"{}\"\n\t\t\"y\"\t\"{}\"\n\t\t\"scale\"\t\"{}\"\n\t\t\"zpos\"\t\"{}\"\n\t}}",
            c.slot, c.hero_id, c.x, c.y, c.scale, c.z
        );
    }
    out.push_str("\n}");
    out
}

/// Lay out a ranking on the named preset.
pub fn emit(ranked: &RankedList, preset_name: &str) -> Result<String, LayoutError> {
    let geo = preset(preset_name)?;
    Ok(render(&cells(ranked.heroes(), geo)))
}
