// Model serialization tests (lenient API decoding, flat totals JSON)

use citadel_dash::models::*;

#[test]
fn test_entity_decodes_go_host_shape() {
    let e: Entity = serde_json::from_str(
        r#"{"id":"b8f6b1166755","addr":"10.0.0.4:2375","cpus":8,"memory":16384}"#,
    )
    .unwrap();
    assert_eq!(e.name, "b8f6b1166755");
    assert_eq!(e.addr.as_deref(), Some("10.0.0.4:2375"));
    assert_eq!(e.cpus, Some(8.0));
    assert_eq!(e.memory, Some(16384.0));
    assert_eq!(e.status, "");
}

#[test]
fn test_entity_null_numbers_are_absent() {
    let e: Entity =
        serde_json::from_str(r#"{"name":"redis","status":"healthy","cpu":null,"memory":"12.5"}"#)
            .unwrap();
    assert_eq!(e.cpu, None);
    assert_eq!(e.memory, Some(12.5));
    assert_eq!(Field::Cpu.value(&e), 0.0);
    assert_eq!(Field::Memory.value(&e), 12.5);
}

#[test]
fn test_entity_with_id_and_name_prefers_name() {
    let e: Entity =
        serde_json::from_str(r#"{"id":"abc","name":"redis","cpu":2}"#).unwrap();
    assert_eq!(e.name, "redis");
    assert_eq!(e.id.as_deref(), Some("abc"));
    assert_eq!(e.cpu, Some(2.0));
}

#[test]
fn test_entity_blank_name_falls_back_to_id() {
    let e: Entity = serde_json::from_str(r#"{"id":"abc","name":null}"#).unwrap();
    assert_eq!(e.name, "abc");
}

#[test]
fn test_entity_bad_attributes_do_not_fail_the_collection() {
    let entities: Vec<Entity> = serde_json::from_str(
        r#"[
            {"id":"abc","name":"redis","cpu":2},
            {"name":null,"cpu":2},
            {"name":"web","image":5,"addr":false,"ip":["10.0.0.1"]}
        ]"#,
    )
    .unwrap();
    assert_eq!(entities.len(), 3);
    assert_eq!(entities[1].name, "");
    assert_eq!(entities[1].cpu, Some(2.0));
    assert_eq!(entities[2].image, None);
    assert_eq!(entities[2].addr, None);
    assert_eq!(entities[2].ip, None);
}

#[test]
fn test_sample_decodes_metrics_store_shape() {
    let s: Sample = serde_json::from_str(
        r#"{"time":1404990600000,"memory":{"used":512,"total":1024},"cpu":{"nice":0,"sys":5,"user":20,"wait":75},"load_1":0.3,"load_5":0.2,"load_15":0.1}"#,
    )
    .unwrap();
    assert_eq!(s.time, Some(1404990600000.0));
    assert_eq!(s.memory.as_ref().unwrap().used, Some(512.0));
    assert_eq!(s.cpu.as_ref().unwrap().wait, Some(75.0));
    assert_eq!(s.load1, Some(0.3));
    assert_eq!(s.load15, Some(0.1));
}

#[test]
fn test_sample_with_broken_memory_still_decodes() {
    let s: Sample = serde_json::from_str(r#"{"time":1,"memory":"n/a","load_1":"x"}"#).unwrap();
    assert_eq!(s.time, Some(1.0));
    assert!(s.memory.is_none());
    assert_eq!(s.load1, None);
}

#[test]
fn test_field_parse_is_case_insensitive() {
    assert_eq!("CPU".parse::<Field>().unwrap(), Field::Cpu);
    assert_eq!(" instances ".parse::<Field>().unwrap(), Field::Instances);
    let err = "disk".parse::<Field>().unwrap_err();
    assert_eq!(err.to_string(), "unknown field: disk");
}

#[test]
fn test_totals_serialize_flat() {
    let totals = Totals {
        count: 2,
        totals: [(Field::Cpu, 10.0), (Field::Memory, 150.0)].into_iter().collect(),
    };
    let json = serde_json::to_value(&totals).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"count": 2, "cpu": 10.0, "memory": 150.0})
    );
}

#[test]
fn test_group_serializes_key_and_hides_members() {
    let group = AggregateGroup {
        key: GroupKey::Named("redis".into()),
        totals: Totals {
            count: 1,
            totals: [(Field::Instances, 96.0)].into_iter().collect(),
        },
        members: vec![1],
    };
    let json = serde_json::to_value(&group).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"key": "redis", "count": 1, "instances": 96.0})
    );

    let unknown = AggregateGroup {
        key: GroupKey::Unknown,
        ..group
    };
    let json = serde_json::to_value(&unknown).unwrap();
    assert!(json["key"].is_null());
    assert_eq!(unknown.key.to_string(), "unknown");
}

#[test]
fn test_entity_kind_serializes_lowercase() {
    let e = Entity::new(EntityKind::Service, "api", "healthy");
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["kind"], "service");
    assert!(json.get("cpu").is_none());
}
