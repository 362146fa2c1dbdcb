//! Level descriptions and built levels
//!
//! Level files are authored in tiles. Building a level scales every
//! coordinate by the tile size and spawns the voidwalkers; it either
//! succeeds completely or reports what was wrong with the data.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hostile::Voidwalker;
use super::rect::Rect;
use crate::error::LevelError;
use crate::tuning::Tuning;

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

/// A wall block in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallData {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One level as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Level width in tiles
    pub width: i32,
    /// Level height in tiles
    pub height: i32,
    pub walls: Vec<WallData>,
    pub oxygen_stations: Vec<TilePoint>,
    pub voidwalkers: Vec<TilePoint>,
    pub player_start: TilePoint,
    pub exit: TilePoint,
}

impl LevelData {
    fn validate(&self) -> Result<(), LevelError> {
        if self.width <= 0 {
            return Err(LevelError::InvalidDimension {
                what: "level width",
                value: self.width,
            });
        }
        if self.height <= 0 {
            return Err(LevelError::InvalidDimension {
                what: "level height",
                value: self.height,
            });
        }
        for wall in &self.walls {
            if wall.width < 0 {
                return Err(LevelError::InvalidDimension {
                    what: "wall width",
                    value: wall.width,
                });
            }
            if wall.height < 0 {
                return Err(LevelError::InvalidDimension {
                    what: "wall height",
                    value: wall.height,
                });
            }
        }

        self.check_inside("player start", self.player_start)?;
        self.check_inside("exit", self.exit)?;
        for station in &self.oxygen_stations {
            self.check_inside("oxygen station", *station)?;
        }
        for spawn in &self.voidwalkers {
            self.check_inside("voidwalker spawn", *spawn)?;
        }
        Ok(())
    }

    fn check_inside(&self, what: &'static str, p: TilePoint) -> Result<(), LevelError> {
        if (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y) {
            Ok(())
        } else {
            Err(LevelError::OutOfBounds { what, x: p.x, y: p.y })
        }
    }
}

/// All levels of a campaign, in play order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelData>,
}

impl LevelSet {
    /// Parse and validate a level set from JSON
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let set: LevelSet = serde_json::from_str(json)?;
        if set.levels.is_empty() {
            return Err(LevelError::Empty);
        }
        for level in &set.levels {
            level.validate()?;
        }
        Ok(set)
    }

    /// Read a level set from disk
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json(&json)?;
        log::info!("Loaded {} levels from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Build level `number` (1-based)
    pub fn build(&self, number: u32, tuning: &Tuning) -> Result<Level, LevelError> {
        let data = number
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .ok_or(LevelError::MissingLevel {
                index: number,
                available: self.levels.len(),
            })?;
        Level::build(data, tuning)
    }
}

/// A solid wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
    pub color: [u8; 3],
    pub border_color: [u8; 3],
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            color: [128, 128, 128],
            border_color: [200, 200, 200],
        }
    }
}

/// An oxygen refill zone. Never used up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OxygenStation {
    pub pos: Vec2,
    pub rect: Rect,
}

/// A playable level in pixel space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub walls: Vec<Wall>,
    pub oxygen_stations: Vec<OxygenStation>,
    pub voidwalkers: Vec<Voidwalker>,
    /// Level bounds in pixels
    pub width: f32,
    pub height: f32,
    pub player_start: Vec2,
    pub exit: Rect,
}

impl Level {
    /// Validate `data` and convert it to pixel space
    pub fn build(data: &LevelData, tuning: &Tuning) -> Result<Self, LevelError> {
        data.validate()?;

        let tile = tuning.tile_size;
        let to_px = |p: TilePoint| Vec2::new(p.x as f32 * tile, p.y as f32 * tile);

        let walls = data
            .walls
            .iter()
            .map(|w| {
                Wall::new(Rect::new(
                    w.x as f32 * tile,
                    w.y as f32 * tile,
                    w.width as f32 * tile,
                    w.height as f32 * tile,
                ))
            })
            .collect();

        let station_size = Vec2::splat(tuning.station_size);
        let oxygen_stations = data
            .oxygen_stations
            .iter()
            .map(|&s| {
                let pos = to_px(s);
                OxygenStation {
                    pos,
                    rect: Rect::from_pos_size(pos, station_size),
                }
            })
            .collect();

        let voidwalkers = data
            .voidwalkers
            .iter()
            .map(|&v| Voidwalker::new(to_px(v), tuning))
            .collect();

        Ok(Self {
            walls,
            oxygen_stations,
            voidwalkers,
            width: data.width as f32 * tile,
            height: data.height as f32 * tile,
            player_start: to_px(data.player_start),
            exit: Rect::from_pos_size(to_px(data.exit), Vec2::splat(tile)),
        })
    }

    /// Wall rectangles, for collision
    pub fn wall_rects(&self) -> impl Iterator<Item = &Rect> + Clone {
        self.walls.iter().map(|w| &w.rect)
    }

    /// True if `rect` touches any oxygen station
    pub fn on_station(&self, rect: &Rect) -> bool {
        self.oxygen_stations.iter().any(|s| s.rect.overlaps(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LEVELS: &str = r#"{
        "levels": [
            {
                "width": 25, "height": 20,
                "walls": [
                    { "x": 0, "y": 0, "width": 25, "height": 1 },
                    { "x": 5, "y": 3, "width": 1, "height": 4 }
                ],
                "oxygen_stations": [{ "x": 3, "y": 3 }, { "x": 10, "y": 10 }],
                "voidwalkers": [{ "x": 12, "y": 5 }, { "x": 2, "y": 15 }],
                "player_start": { "x": 2, "y": 2 },
                "exit": { "x": 23, "y": 18 }
            },
            {
                "width": 10, "height": 10,
                "walls": [],
                "oxygen_stations": [],
                "voidwalkers": [],
                "player_start": { "x": 1, "y": 1 },
                "exit": { "x": 8, "y": 8 }
            }
        ]
    }"#;

    #[test]
    fn test_build_scales_to_pixels() {
        let set = LevelSet::from_json(TWO_LEVELS).unwrap();
        let level = set.build(1, &Tuning::default()).unwrap();

        assert_eq!(level.width, 800.0);
        assert_eq!(level.height, 640.0);
        assert_eq!(level.walls[1].rect, Rect::new(160.0, 96.0, 32.0, 128.0));
        assert_eq!(level.player_start, Vec2::new(64.0, 64.0));
        assert_eq!(level.exit, Rect::new(736.0, 576.0, 32.0, 32.0));
    }

    #[test]
    fn test_build_preserves_order() {
        let set = LevelSet::from_json(TWO_LEVELS).unwrap();
        let level = set.build(1, &Tuning::default()).unwrap();

        assert_eq!(level.oxygen_stations[0].pos, Vec2::new(96.0, 96.0));
        assert_eq!(level.oxygen_stations[1].pos, Vec2::new(320.0, 320.0));
        assert_eq!(level.voidwalkers[0].body.pos, Vec2::new(384.0, 160.0));
        assert_eq!(level.voidwalkers[1].body.pos, Vec2::new(64.0, 480.0));
        assert_eq!(level.voidwalkers[0].patrol_b, 584.0);
    }

    #[test]
    fn test_level_numbers_are_one_based() {
        let set = LevelSet::from_json(TWO_LEVELS).unwrap();
        let tuning = Tuning::default();
        assert_eq!(set.build(2, &tuning).unwrap().width, 320.0);
        assert!(matches!(
            set.build(0, &tuning),
            Err(LevelError::MissingLevel { index: 0, available: 2 })
        ));
        assert!(matches!(
            set.build(3, &tuning),
            Err(LevelError::MissingLevel { index: 3, .. })
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"{ "levels": [ {
            "width": 10, "height": 10, "walls": [], "oxygen_stations": [],
            "voidwalkers": [], "exit": { "x": 1, "y": 1 }
        } ] }"#;
        assert!(matches!(LevelSet::from_json(json), Err(LevelError::Parse(_))));
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(
            LevelSet::from_json(r#"{ "levels": [] }"#),
            Err(LevelError::Empty)
        ));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut data = LevelSet::from_json(TWO_LEVELS).unwrap().levels[1].clone();
        data.walls.push(WallData { x: 1, y: 1, width: -2, height: 1 });
        assert!(matches!(
            Level::build(&data, &Tuning::default()),
            Err(LevelError::InvalidDimension { what: "wall width", value: -2 })
        ));

        let mut data = LevelSet::from_json(TWO_LEVELS).unwrap().levels[1].clone();
        data.exit = TilePoint { x: 10, y: 3 };
        assert!(matches!(
            Level::build(&data, &Tuning::default()),
            Err(LevelError::OutOfBounds { what: "exit", x: 10, y: 3 })
        ));
    }

    #[test]
    fn test_zero_area_wall_accepted() {
        let mut data = LevelSet::from_json(TWO_LEVELS).unwrap().levels[1].clone();
        data.walls.push(WallData { x: 4, y: 4, width: 0, height: 3 });
        let level = Level::build(&data, &Tuning::default()).unwrap();
        assert!(level.walls[0].rect.is_empty());
    }

    #[test]
    fn test_bundled_levels_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/levels.json");
        let set = LevelSet::load(&path).unwrap();
        assert_eq!(set.len(), 3);
        for number in 1..=3 {
            let level = set.build(number, &Tuning::default()).unwrap();
            let start = Rect::from_pos_size(level.player_start, Vec2::splat(48.0));
            assert!(!level.wall_rects().any(|w| w.overlaps(&start)));
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            LevelSet::load(Path::new("no/such/levels.json")),
            Err(LevelError::Io { .. })
        ));
    }

    #[test]
    fn test_on_station() {
        let set = LevelSet::from_json(TWO_LEVELS).unwrap();
        let level = set.build(1, &Tuning::default()).unwrap();
        assert!(level.on_station(&Rect::new(100.0, 100.0, 48.0, 48.0)));
        assert!(!level.on_station(&Rect::new(600.0, 100.0, 48.0, 48.0)));
    }
}
