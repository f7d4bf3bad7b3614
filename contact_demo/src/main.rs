//! Narrow-phase demo
//!
//! Scatters boxes and spheres through a small volume, pairs them with a
//! brute-force AABB sweep standing in for a broad-phase, removes a few bodies
//! behind the pair list's back and reports the contacts that survive.
//!
//! Usage: `contact_demo [config.toml|config.ron]`

use contact_engine::foundation::logging;
use contact_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Scene settings
const BODY_COUNT: usize = 48;
const SCENE_HALF_SIZE: f32 = 4.0;
const REMOVED_BODIES: usize = 4;
const SEED: u64 = 0x5eed;

fn random_vec(rng: &mut StdRng, range: std::ops::Range<f32>) -> Vec3 {
    Vec3::new(
        rng.gen_range(range.clone()),
        rng.gen_range(range.clone()),
        rng.gen_range(range),
    )
}

fn build_scene(rng: &mut StdRng) -> Result<(BodySet, Vec<BodyHandle>), CollisionError> {
    let mut bodies = BodySet::new();
    let mut handles = Vec::with_capacity(BODY_COUNT);

    for i in 0..BODY_COUNT {
        let position = random_vec(rng, -SCENE_HALF_SIZE..SCENE_HALF_SIZE);
        let collider = if i % 2 == 0 {
            Collider::cuboid(
                position,
                random_vec(rng, -180.0..180.0),
                random_vec(rng, 0.5..2.0),
            )?
        } else {
            Collider::sphere(rng.gen_range(0.3..1.2), position)?
        };
        handles.push(bodies.insert(RigidBody::new(collider)));
    }

    Ok((bodies, handles))
}

/// Every pair whose world AABBs overlap
fn sweep_pairs(bodies: &BodySet) -> Vec<PotentialContact> {
    let boxes: Vec<(BodyHandle, Aabb)> = bodies
        .iter()
        .map(|(handle, body)| (handle, body.collider().aabb()))
        .collect();

    let mut pairs = Vec::new();
    for (i, (first, first_bounds)) in boxes.iter().enumerate() {
        for (second, second_bounds) in &boxes[i + 1..] {
            if first_bounds.intersects(second_bounds) {
                pairs.push(PotentialContact::new(*first, *second));
            }
        }
    }
    pairs
}

fn load_config() -> Result<CollisionConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => CollisionConfig::load_validated(&path),
        None => {
            log::info!("No config file given, using defaults");
            Ok(CollisionConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config()?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let (mut bodies, handles) = build_scene(&mut rng)?;
    log::info!("Scene built with {} bodies", bodies.len());

    let pairs = sweep_pairs(&bodies);
    log::info!("Broad-phase sweep produced {} candidate pairs", pairs.len());

    // Destroyed after the sweep; their pairs must be skipped
    for handle in handles.iter().step_by(BODY_COUNT / REMOVED_BODIES) {
        bodies.remove(*handle);
    }

    let mut detector = CollisionDetector::with_config(config)?;
    let contacts = detector.generate_contacts(&bodies, &pairs)?;

    for contact in contacts {
        let kinds = (
            bodies.get(contact.body1).map(RigidBody::kind),
            bodies.get(contact.body2).map(RigidBody::kind),
        );
        log::info!(
            "{:?} vs {:?}: point ({:.3}, {:.3}, {:.3}) normal ({:.3}, {:.3}, {:.3}) depth {:.4}",
            kinds.0,
            kinds.1,
            contact.point.x,
            contact.point.y,
            contact.point.z,
            contact.normal.x,
            contact.normal.y,
            contact.normal.z,
            contact.penetration
        );
    }

    let stats = detector.last_pass();
    log::info!(
        "{} contacts from {} candidates ({} stale)",
        stats.contacts,
        stats.candidates,
        stats.stale
    );
    Ok(())
}
