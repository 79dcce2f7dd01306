//! Spatial index contract and a uniform-grid implementation.

use std::collections::HashMap;

use glam::IVec2;

use rubble_core::constants::{TILE_HEIGHT, TILE_WIDTH};
use rubble_core::enums::CollisionTeam;
use rubble_core::flags::TileFlags;
use rubble_core::types::{TileItem, TileItemRef};

/// Per-tile registry of everything that can be hit or drawn.
pub trait SpatialIndex {
    /// Register `item` or move it if already registered.
    fn move_item(&mut self, item: TileItemRef, tile: &TileItem);

    /// Forget `item`. Unknown items are ignored.
    fn remove_item(&mut self, item: TileItemRef);

    /// First entry overlapping `exclude`'s footprint at `pos` (real space)
    /// whose flags contain `mask`. Entries on the same non-`None` team as
    /// `team` are skipped unless `allow_team_hits`.
    fn shootable_at(
        &self,
        exclude: TileItemRef,
        pos: IVec2,
        mask: TileFlags,
        team: CollisionTeam,
        allow_team_hits: bool,
    ) -> Option<TileItemRef>;

    /// Whether a real-space position lies inside the map.
    fn contains(&self, pos: IVec2) -> bool;
}

/// Grid of `TILE_WIDTH` x `TILE_HEIGHT` buckets.
#[derive(Debug, Clone)]
pub struct TileMap {
    size: IVec2,
    tiles: Vec<Vec<TileItemRef>>,
    items: HashMap<TileItemRef, (TileItem, Option<usize>)>,
}

impl TileMap {
    /// A map of `width` x `height` tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let size = IVec2::new(width.max(1), height.max(1));
        Self {
            size,
            tiles: vec![Vec::new(); (size.x * size.y) as usize],
            items: HashMap::new(),
        }
    }

    pub fn get(&self, item: TileItemRef) -> Option<&TileItem> {
        self.items.get(&item).map(|(tile, _)| tile)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn tile_of(&self, pos: IVec2) -> Option<IVec2> {
        let t = IVec2::new(pos.x.div_euclid(TILE_WIDTH), pos.y.div_euclid(TILE_HEIGHT));
        (t.x >= 0 && t.y >= 0 && t.x < self.size.x && t.y < self.size.y).then_some(t)
    }

    fn bucket(&self, tile: IVec2) -> usize {
        (tile.y * self.size.x + tile.x) as usize
    }

    fn unlink(&mut self, item: TileItemRef, bucket: Option<usize>) {
        if let Some(b) = bucket {
            self.tiles[b].retain(|i| *i != item);
        }
    }
}

impl SpatialIndex for TileMap {
    fn move_item(&mut self, item: TileItemRef, tile: &TileItem) {
        let bucket = self.tile_of(tile.pos).map(|t| self.bucket(t));
        let previous = self.items.insert(item, (*tile, bucket));
        match previous {
            Some((_, old)) if old == bucket => {}
            Some((_, old)) => {
                self.unlink(item, old);
                if let Some(b) = bucket {
                    self.tiles[b].push(item);
                }
            }
            None => {
                if let Some(b) = bucket {
                    self.tiles[b].push(item);
                }
            }
        }
    }

    fn remove_item(&mut self, item: TileItemRef) {
        if let Some((_, bucket)) = self.items.remove(&item) {
            self.unlink(item, bucket);
        }
    }

    fn shootable_at(
        &self,
        exclude: TileItemRef,
        pos: IVec2,
        mask: TileFlags,
        team: CollisionTeam,
        allow_team_hits: bool,
    ) -> Option<TileItemRef> {
        let size = self.get(exclude).map(|t| t.size).unwrap_or(IVec2::ZERO);
        let centre = IVec2::new(pos.x.div_euclid(TILE_WIDTH), pos.y.div_euclid(TILE_HEIGHT));
        for dy in -1..=1 {
            for dx in -1..=1 {
                let t = centre + IVec2::new(dx, dy);
                if t.x < 0 || t.y < 0 || t.x >= self.size.x || t.y >= self.size.y {
                    continue;
                }
                for &candidate in &self.tiles[self.bucket(t)] {
                    if candidate == exclude {
                        continue;
                    }
                    let Some((tile, _)) = self.items.get(&candidate) else {
                        continue;
                    };
                    if !tile.flags.contains(mask) {
                        continue;
                    }
                    if team != CollisionTeam::None && tile.team == team && !allow_team_hits {
                        continue;
                    }
                    if tile.overlaps(pos, size) {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    fn contains(&self, pos: IVec2) -> bool {
        self.tile_of(pos).is_some()
    }
}
