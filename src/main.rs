//! Collision relay demo entry point.
//!
//! Builds a small scene and drives it with scripted physics reports:
//!
//! - a **hand** body carrying a notifier, an active collision container, a
//!   nearest sorter, a slicer and a publisher
//! - a **cube** body made of two colliders with a consumer underneath
//! - a **sphere** body whose consumer refuses publishers from the `"hand"` group
//!
//! Each frame the raw reports are dispatched, the hand's active collisions are
//! sorted nearest-first, sliced down to the configured count and published.
//! Everything that happens is logged.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 4 --config relay.ini
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use collision_relay::components::activecollisions::ActiveCollisionsContainer;
use collision_relay::components::collider::Collider;
use collision_relay::components::collisionevent::CollisionPhase;
use collision_relay::components::consumer::ActiveCollisionConsumer;
use collision_relay::components::group::Group;
use collision_relay::components::position::Position;
use collision_relay::components::publisher::ActiveCollisionPublisher;
use collision_relay::components::rigidbody::RigidBody;
use collision_relay::components::rule::Rule;
use collision_relay::events::activecollisions::{AllCollisionsStopped, FirstCollisionStarted};
use collision_relay::events::collision::{CollisionStarted, CollisionStopped, RawCollision};
use collision_relay::events::consumer::{CollisionConsumed, ConsumerCleared};
use collision_relay::resources::relayconfig::RelayConfig;
use collision_relay::systems::activecollisions::active_collisions_snapshot;
use collision_relay::systems::collisionnotifier::dispatch_raw_collisions;
use collision_relay::systems::pipeline::{reverse_collisions, slice_collisions, sort_nearest_collisions};
use collision_relay::systems::publisher::{publish, set_publisher_collisions, unpublish};

/// Collision relay demo
#[derive(Parser)]
#[command(version, about = "Scripted demo of the collision relay pipeline")]
struct Cli {
    /// INI file with notifier and pipeline settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of scripted frames to run.
    #[arg(long, default_value_t = 4)]
    frames: u32,
}

/// The entity driving the publish pipeline.
#[derive(Resource, Clone, Copy)]
struct Hand(Entity);

/// Collider entities the script reports against.
#[derive(Resource, Clone, Copy)]
struct Targets {
    cube_a: Entity,
    cube_b: Entity,
    sphere: Entity,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => RelayConfig::with_path(path),
        None => RelayConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }

    let mut world = World::new();
    world.init_resource::<Messages<RawCollision>>();
    spawn_scene(&mut world, &config);
    world.insert_resource(config);

    world.spawn(Observer::new(|trigger: On<CollisionStarted>| {
        let ev = trigger.event();
        info!("{:?} started touching {:?}", ev.notifier, ev.collision.containing_transform);
    }));
    world.spawn(Observer::new(|trigger: On<CollisionStopped>| {
        let ev = trigger.event();
        info!("{:?} stopped touching {:?}", ev.notifier, ev.collision.containing_transform);
    }));
    world.spawn(Observer::new(|trigger: On<FirstCollisionStarted>| {
        info!("{:?} is now touching something", trigger.event().container);
    }));
    world.spawn(Observer::new(|trigger: On<AllCollisionsStopped>| {
        info!("{:?} is no longer touching anything", trigger.event().container);
    }));
    world.spawn(Observer::new(|trigger: On<CollisionConsumed>| {
        let ev = trigger.event();
        info!(
            "consumer {:?} accepted {:?} from publisher {:?}",
            ev.consumer, ev.consumed.collision.collider, ev.consumed.publisher
        );
    }));
    world.spawn(Observer::new(|trigger: On<ConsumerCleared>| {
        info!("consumer {:?} cleared", trigger.event().consumer);
    }));
    world.flush();

    let mut frame = Schedule::default();
    frame.add_systems((dispatch_raw_collisions, relay_nearest).chain());

    for index in 0..cli.frames {
        info!("--- frame {} ---", index);
        write_script(&mut world, index);
        frame.run(&mut world);
    }
}

fn spawn_scene(world: &mut World, config: &RelayConfig) {
    let hand = world
        .spawn((
            RigidBody,
            Position::new(0.0, 0.0, 0.0),
            Group::new("hand"),
            config.notifier(),
            ActiveCollisionsContainer::new(),
            config.slicer(),
            config.reverser(),
            ActiveCollisionPublisher::new(),
        ))
        .id();
    world.entity_mut(hand).insert(config.sorter(Some(hand)));
    world.spawn((Collider, ChildOf(hand)));

    let cube = world.spawn((RigidBody, Position::new(1.0, 0.0, 0.0))).id();
    let cube_a = world.spawn((Collider, ChildOf(cube))).id();
    let cube_b = world.spawn((Collider, ChildOf(cube))).id();
    world.spawn((ActiveCollisionConsumer::new(), ChildOf(cube)));

    let sphere = world.spawn((RigidBody, Position::new(3.0, 0.0, 0.0))).id();
    let sphere_collider = world.spawn((Collider, ChildOf(sphere))).id();
    world.spawn((
        ActiveCollisionConsumer::new().with_publisher_validity(Rule::in_group("hand").negate()),
        ChildOf(sphere),
    ));

    world.flush();
    world.insert_resource(Hand(hand));
    world.insert_resource(Targets {
        cube_a,
        cube_b,
        sphere: sphere_collider,
    });
}

fn write_script(world: &mut World, frame: u32) {
    let hand = world.resource::<Hand>().0;
    let targets = *world.resource::<Targets>();
    let report = |phase, collider| RawCollision {
        phase,
        notifier: hand,
        collider,
        is_trigger: true,
        detail: None,
    };
    let batch: Vec<RawCollision> = match frame {
        0 => vec![
            report(CollisionPhase::Started, targets.sphere),
            report(CollisionPhase::Started, targets.cube_a),
            report(CollisionPhase::Started, targets.cube_b),
        ],
        1 => vec![
            report(CollisionPhase::Changed, targets.sphere),
            report(CollisionPhase::Changed, targets.cube_a),
        ],
        2 => vec![report(CollisionPhase::Stopped, targets.cube_a)],
        3 => vec![report(CollisionPhase::Stopped, targets.sphere)],
        _ => Vec::new(),
    };
    let mut messages = world.resource_mut::<Messages<RawCollision>>();
    for raw in batch {
        messages.write(raw);
    }
}

/// Publish the hand's nearest collisions, or unpublish once it touches nothing.
fn relay_nearest(world: &mut World) {
    let hand = world.resource::<Hand>().0;
    let active = active_collisions_snapshot(world, hand);
    if active.is_empty() {
        unpublish(world, hand);
        set_publisher_collisions(world, hand, &active);
        return;
    }
    let nearest = sort_nearest_collisions(world, hand, &active);
    let ordered = reverse_collisions(world, hand, &nearest);
    let selected = match slice_collisions(world, hand, &ordered) {
        Some((sliced, _remaining)) => sliced,
        None => ordered,
    };
    set_publisher_collisions(world, hand, &selected);
    let reached = publish(world, hand);
    info!(
        "{} active, {} published, {} consumer(s) reached",
        active.len(),
        selected.len(),
        reached
    );
}
