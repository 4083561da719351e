//! JSON-loaded snapshots and serialized output.

use org_graph_core::Employee;
use org_graph_hierarchy::{AncestorRelation, HierarchyService};

const SNAPSHOT: &str = r#"[
    {"id": 1, "name": "Jan Kowalski", "team_id": 1, "superior_id": null, "vacation_package_id": 1},
    {"id": 2, "name": "Kamil Nowak", "team_id": 1, "superior_id": 1, "vacation_package_id": 1},
    {"id": 3, "name": "Anna Mariacka", "team_id": 1, "superior_id": 1, "vacation_package_id": 1},
    {"id": 4, "name": "Andrzej Abacki", "team_id": 1, "superior_id": 2, "vacation_package_id": 1},
    {"id": 5, "name": "Tomasz Java", "team_id": 2, "vacation_package_id": 1}
]"#;

#[test]
fn test_build_from_json_snapshot() {
    let employees: Vec<Employee> = serde_json::from_str(SNAPSHOT).expect("snapshot must parse");
    let service = HierarchyService::new();

    let relations = service.build_closure(Some(&employees)).expect("build failed");

    assert_eq!(relations.len(), 4);
    assert_eq!(service.distance_to_superior(2, 1), Ok(Some(1)));
    assert_eq!(service.distance_to_superior(4, 3), Ok(None));
    assert_eq!(service.distance_to_superior(4, 1), Ok(Some(2)));
    assert!(service.ancestors_of(5).expect("built").is_empty());
}

#[test]
fn test_relations_serialize_as_flat_records() {
    let relation = AncestorRelation::new(4, 1, 2);
    let value = serde_json::to_value(relation).expect("serialize");

    assert_eq!(
        value,
        serde_json::json!({"employee_id": 4, "ancestor_id": 1, "distance": 2})
    );
}
