//! Map generation.
//!
//! Planets are placed by rejection sampling: a candidate centre is drawn
//! uniformly inside the playfield margins and kept only if it is at least
//! `min_separation` away from every planet already placed. Each planet gets
//! `max_placement_attempts` tries; running out is reported as
//! [`SetupError::PlacementExhausted`] rather than looping forever.
//!
//! Planet 0 belongs to the player, planet 1 to the AI and the rest start
//! neutral.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entity::{Owner, Planet, PlanetId};
use crate::error::SetupError;

/// Owner of the planet generated at `index`.
#[must_use]
pub const fn starting_owner(index: usize) -> Owner {
    match index {
        0 => Owner::Player,
        1 => Owner::Ai,
        _ => Owner::Neutral,
    }
}

/// Generates the planets of a new map.
///
/// # Errors
///
/// Returns [`SetupError::PlacementExhausted`] if some planet cannot be
/// placed within the attempt limit.
///
/// # Example
///
/// ```
/// use planetwar_core::config::GameConfig;
/// use planetwar_core::setup::generate_planets;
///
/// let mut rng = planetwar_core::new_rng(5);
/// let planets = generate_planets(&GameConfig::default(), &mut rng).unwrap();
/// assert_eq!(planets.len(), 10);
/// ```
pub fn generate_planets<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<Planet>, SetupError> {
    let mut planets: Vec<Planet> = Vec::with_capacity(config.planet_count);

    for index in 0..config.planet_count {
        let position = place(index, &planets, config, rng)?;
        #[allow(clippy::cast_precision_loss)]
        let radius = config.planet_radius.sample(rng) as f32;
        let owner = starting_owner(index);
        let ships = match owner {
            Owner::Neutral => config.neutral_ships.sample(rng),
            Owner::Player | Owner::Ai => config.owned_ships.sample(rng),
        };
        let production_rate = config.production_rate.sample(rng);

        #[allow(clippy::cast_possible_truncation)]
        let id = PlanetId::new(index as u32);
        planets.push(Planet::new(id, position, radius, owner, ships, production_rate));
    }

    debug!(planets = planets.len(), "map generated");
    Ok(planets)
}

/// Draws a centre for planet `index` that keeps its distance from `placed`.
fn place<R: Rng + ?Sized>(
    index: usize,
    placed: &[Planet],
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec2, SetupError> {
    #[allow(clippy::cast_precision_loss)]
    let min_separation = config.min_separation as f32;

    for _ in 0..config.max_placement_attempts {
        let x = rng.gen_range(config.margin..=config.width - config.margin);
        let y = rng.gen_range(config.margin..=config.height - config.margin);
        #[allow(clippy::cast_precision_loss)]
        let candidate = Vec2::new(x as f32, y as f32);

        if placed
            .iter()
            .all(|planet| planet.position().distance(candidate) >= min_separation)
        {
            return Ok(candidate);
        }
    }

    Err(SetupError::PlacementExhausted {
        index,
        attempts: config.max_placement_attempts,
        min_separation: config.min_separation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_rng;

    #[test]
    fn default_map_respects_separation() {
        let config = GameConfig::default();
        for seed in 0..20 {
            let planets = generate_planets(&config, &mut new_rng(seed)).unwrap();
            assert_eq!(planets.len(), 10);
            for (i, a) in planets.iter().enumerate() {
                for b in &planets[i + 1..] {
                    assert!(a.distance_to(b) >= 100.0, "seed {seed}: too close");
                }
            }
        }
    }

    #[test]
    fn owners_are_player_ai_then_neutral() {
        let planets = generate_planets(&GameConfig::default(), &mut new_rng(11)).unwrap();
        assert_eq!(planets[0].owner(), Owner::Player);
        assert_eq!(planets[1].owner(), Owner::Ai);
        assert!(planets[2..].iter().all(|p| p.owner() == Owner::Neutral));
    }

    #[test]
    fn attributes_fall_in_configured_ranges() {
        let config = GameConfig::default();
        let planets = generate_planets(&config, &mut new_rng(4)).unwrap();
        for planet in &planets {
            let ships_range = match planet.owner() {
                Owner::Neutral => config.neutral_ships,
                Owner::Player | Owner::Ai => config.owned_ships,
            };
            assert!(ships_range.contains(planet.ships()));
            assert!(config.production_rate.contains(planet.production_rate()));
            assert!(planet.radius() >= 20.0 && planet.radius() <= 40.0);
            let p = planet.position();
            assert!(p.x >= 50.0 && p.x <= 950.0);
            assert!(p.y >= 50.0 && p.y <= 650.0);
        }
    }

    #[test]
    fn ids_follow_generation_order() {
        let planets = generate_planets(&GameConfig::default(), &mut new_rng(8)).unwrap();
        for (index, planet) in planets.iter().enumerate() {
            assert_eq!(planet.id().index(), index);
        }
    }

    #[test]
    fn impossible_layout_fails_fast() {
        let config = GameConfig {
            width: 300,
            height: 300,
            planet_count: 30,
            max_placement_attempts: 50,
            ..GameConfig::default()
        };
        let err = generate_planets(&config, &mut new_rng(1)).unwrap_err();
        assert!(matches!(
            err,
            SetupError::PlacementExhausted {
                attempts: 50,
                min_separation: 100,
                ..
            }
        ));
    }
}
