//! Default terrain generator - rebuilds a tile grid whenever the realm changes

use hecs::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::components::{Landmark, Terrain, Tile};
use super::config::WorldGenConfig;
use super::WorldSimulation;
use crate::realm::RealmDescriptor;

/// Procedural realm terrain held in an ECS world
pub struct WorldGen {
    /// ECS world containing one entity per tile
    pub world: World,
    config: WorldGenConfig,
    realm: Option<RealmDescriptor>,
    generation_count: u32,
    elapsed: f64,
    ticks: u64,
}

impl WorldGen {
    pub fn new(config: WorldGenConfig) -> Self {
        Self {
            world: World::new(),
            config,
            realm: None,
            generation_count: 0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Realm the current terrain was generated for
    pub fn realm(&self) -> Option<&RealmDescriptor> {
        self.realm.as_ref()
    }

    /// How many times terrain has been (re)generated
    pub fn generation_count(&self) -> u32 {
        self.generation_count
    }

    /// Seconds simulated since the last generation
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames simulated since the last generation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tile_count(&self) -> usize {
        self.world.query::<&Tile>().iter().count()
    }

    pub fn landmark_count(&self) -> usize {
        self.world.query::<(&Tile, &Landmark)>().iter().count()
    }

    pub fn terrain_at(&self, x: u32, y: u32) -> Option<Terrain> {
        self.world
            .query::<(&Tile, &Terrain)>()
            .iter()
            .find(|(_, (tile, _))| tile.x == x && tile.y == y)
            .map(|(_, (_, terrain))| *terrain)
    }

    /// Row-major terrain snapshot, used to compare generations
    pub fn terrain_map(&self) -> Vec<Terrain> {
        let mut tiles: Vec<(Tile, Terrain)> = self
            .world
            .query::<(&Tile, &Terrain)>()
            .iter()
            .map(|(_, (tile, terrain))| (*tile, *terrain))
            .collect();
        tiles.sort_by_key(|(tile, _)| (tile.y, tile.x));
        tiles.into_iter().map(|(_, terrain)| terrain).collect()
    }

    fn seed_for(&self, realm: &RealmDescriptor) -> u64 {
        realm_seed(realm) ^ self.config.seed_salt
    }
}

impl Default for WorldGen {
    fn default() -> Self {
        Self::new(WorldGenConfig::default())
    }
}

impl WorldSimulation for WorldGen {
    fn generate(&mut self, realm: &RealmDescriptor) {
        let mut rng = StdRng::seed_from_u64(self.seed_for(realm));

        self.world.clear();

        for y in 0..self.config.height {
            for x in 0..self.config.width {
                let terrain = Terrain::from_roll(rng.gen::<f32>(), realm.layer_index);
                let tile = Tile::new(x, y);

                if terrain.is_walkable() && rng.gen::<f32>() < self.config.landmark_density {
                    let landmark = Landmark::from_index(rng.gen_range(0..3));
                    self.world.spawn((tile, terrain, landmark));
                } else {
                    self.world.spawn((tile, terrain));
                }
            }
        }

        self.realm = Some(realm.clone());
        self.generation_count += 1;
        self.elapsed = 0.0;
        self.ticks = 0;

        log::debug!(
            "Generated realm {}: {} tiles, {} landmarks",
            realm,
            self.tile_count(),
            self.landmark_count()
        );
    }

    fn update(&mut self, delta_seconds: f32) {
        self.elapsed += delta_seconds as f64;
        self.ticks += 1;
    }
}

/// Stable FNV-1a hash of the realm, so a realm always yields the same terrain
fn realm_seed(realm: &RealmDescriptor) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    for byte in realm
        .id
        .bytes()
        .chain(realm.layer_index.to_le_bytes())
    {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
