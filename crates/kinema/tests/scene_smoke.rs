use glam::DVec2;
use kinema::{
    collect_collisions, load_scene, overlaps, step_motion, tick_motion, AssetManifest, DriveMode,
    Entity, EntityId, FixedTimestep, MotionError, MotionState, Scene, SimConfig, SpriteRegistry,
};

const SCENE: &str = r#"[
    { "id": 1, "tag": "left", "width": 10, "height": 10, "pos": [0, 0],
      "motion": { "mode": "constant_velocity", "velocity": [4, 0] } },
    { "id": 2, "tag": "right", "width": 10, "height": 10, "pos": [40, 0],
      "motion": { "mode": "constant_velocity", "velocity": [-4, 0] } },
    { "id": 3, "tag": "ghost", "width": 100, "height": 100, "pos": [-50, -50], "visible": false }
]"#;

#[test]
fn movers_meet_and_bounce_apart() {
    let mut scene = load_scene(SCENE).unwrap();
    let mut pairs = Vec::new();

    let mut ticks = 0;
    while pairs.is_empty() {
        tick_motion(&mut scene, 1.0);
        collect_collisions(&scene, &mut pairs);
        ticks += 1;
        assert!(ticks < 10, "movers never met");
    }
    // 30 units of gap close at 8 per tick: contact on the fourth tick.
    assert_eq!(ticks, 4);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].entity_a, EntityId(1));
    assert_eq!(pairs[0].entity_b, EntityId(2));

    for pair in pairs.drain(..) {
        for id in [pair.entity_a, pair.entity_b] {
            scene.get_mut(id).unwrap().motion.recoil(true, false);
        }
    }
    tick_motion(&mut scene, 1.0);
    tick_motion(&mut scene, 1.0);

    let left = scene.find_by_tag("left").unwrap();
    let right = scene.find_by_tag("right").unwrap();
    assert_eq!(left.motion.velocity().x(), -4.0);
    assert_eq!(right.motion.velocity().x(), 4.0);
    assert!(!overlaps(left, right));
}

#[test]
fn animated_entity_from_registry_sheet() {
    let manifest = AssetManifest::from_json(
        r#"{
            "atlases": [{ "name": "ships", "cols": 4, "rows": 1, "cell_width": 8, "cell_height": 6 }],
            "sprites": {
                "ship_0": { "atlas": 0, "col": 0, "row": 0 },
                "ship_1": { "atlas": 0, "col": 1, "row": 0 }
            }
        }"#,
    )
    .unwrap();
    let registry = SpriteRegistry::from_manifest(&manifest);

    let sheet = registry.sheet(&["ship_0", "ship_1"]);
    let frames = sheet.into_iter().flatten().collect();
    let ship = Entity::animated(EntityId(9), frames).unwrap();
    assert_eq!(ship.size(), DVec2::new(8.0, 6.0));

    let missing: Vec<_> = registry.sheet(&["gone"]).into_iter().flatten().collect();
    assert!(matches!(
        Entity::animated(EntityId(10), missing),
        Err(MotionError::EmptySpriteSheet)
    ));
}

#[test]
fn force_driven_ship_under_fixed_timestep() {
    let motion = MotionState::force_driven(
        DVec2::new(2.0, 0.0),
        5.0,
        1.0,
        DVec2::new(0.25, 0.0),
        3.0,
    )
    .unwrap();
    let mut scene = Scene::new();
    scene.spawn(Entity::shape(EntityId(1), 2.0, 2.0).with_motion(motion));

    let mut ts = FixedTimestep::from_config(&SimConfig { fixed_dt: 1.0, max_steps: 4 });
    let ran = step_motion(&mut scene, &mut ts, 10.0);
    assert_eq!(ran, 4);

    let ship = scene.get(EntityId(1)).unwrap();
    assert_eq!(ship.motion.mode(), DriveMode::ForceDriven);
    assert!(ship.motion.velocity().norm() <= 3.0 + 1e-9);
    assert!(ship.pos().x > 0.0);
    assert_eq!(ship.pos().y, 0.0);

    let mut ship = ship.clone();
    let before = ship.motion.clone();
    assert!(matches!(
        ship.motion.set_force(10.0, 0.0, 5.0),
        Err(MotionError::ForceLimitExceeded { .. })
    ));
    assert_eq!(ship.motion, before);
}
