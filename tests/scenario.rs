use health_counter::{run_scenario, Checkpoint, HealthCounter, Scenario, Step};

fn healths(checkpoints: &[Checkpoint]) -> Vec<(u32, bool)> {
    checkpoints.iter().map(|c| (c.health, c.alive)).collect()
}

#[test]
fn full_health_player_takes_fatal_damage() {
    let mut sink = Vec::new();
    let checkpoints = run_scenario(&Scenario::default(), &mut sink).unwrap();
    assert_eq!(
        healths(&checkpoints),
        vec![(100, true), (70, true), (90, true), (0, false)]
    );
    assert_eq!(checkpoints[3].step, Some(Step::Damage(100)));
}

#[test]
fn zero_health_start_stays_dead_after_healing() {
    let scenario = Scenario {
        initial: 0,
        steps: vec![Step::Heal(50)],
    };
    let mut sink = Vec::new();
    let checkpoints = run_scenario(&scenario, &mut sink).unwrap();
    assert_eq!(healths(&checkpoints), vec![(0, false), (0, false)]);
}

#[test]
fn counter_api_matches_scripted_run() {
    let mut player = HealthCounter::new(100).unwrap();
    player.damage(30);
    assert_eq!(player.health(), 70);
    player.heal(20);
    assert_eq!(player.health(), 90);
    player.damage(100);
    assert_eq!(player.health(), 0);
    assert!(!player.is_alive());
}

#[test]
fn scenario_loads_from_json_file() {
    let path = std::env::temp_dir().join(format!("health_scenario_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"initial": 20, "steps": [{"op": "damage", "amount": 25}, {"op": "heal", "amount": 5}]}"#,
    )
    .unwrap();

    let scenario = health_counter::load_scenario(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut sink = Vec::new();
    let checkpoints = run_scenario(&scenario, &mut sink).unwrap();
    assert_eq!(healths(&checkpoints), vec![(20, true), (0, false), (5, true)]);
}
