mod fixtures;

use delivery_planner::{ConfigError, Planner, RoutingError, SolveOptions, Topology, TopologyConfig};

use fixtures::order;

const FOUR_WAREHOUSES: &str = r#"{
    "hub": "H",
    "warehouses": ["W1", "W2", "W3", "W4"],
    "products": {
        "p1": { "warehouse": "W1", "weight": 1.0 },
        "p2": { "warehouse": "W2", "weight": 1.0 },
        "p3": { "warehouse": "W3", "weight": 1.0 },
        "p4": { "warehouse": "W4", "weight": 6.0 }
    },
    "distances": [
        { "from": "W1", "to": "H", "distance": 1.0 },
        { "from": "H", "to": "W2", "distance": 2.0 },
        { "from": "W3", "to": "H", "distance": 3.0 },
        { "from": "W4", "to": "H", "distance": 4.0 },
        { "from": "W1", "to": "W2", "distance": 1.5 }
    ]
}"#;

fn four_warehouses() -> Topology {
    TopologyConfig::from_json_str(FOUR_WAREHOUSES)
        .and_then(|config| config.build())
        .expect("valid topology")
}

#[test]
fn loads_topology_from_json() {
    let topology = four_warehouses();

    assert_eq!(topology.hub().as_str(), "H");
    assert_eq!(topology.warehouses().len(), 4);
    assert_eq!(topology.catalog().len(), 4);
}

#[test]
fn plans_against_custom_topology() {
    let topology = four_warehouses();
    let order = order(&[("p1", 1), ("p2", 1), ("p3", 1), ("p4", 1)]);

    // loaded legs back: 10 + 20 + 30 + 18*4; empty legs out: 100 minus the longest (40)
    let cost = Planner::new(&topology).compute_min_cost(&order).unwrap();
    assert_eq!(cost, 10.0 + 20.0 + 30.0 + 72.0 + 60.0);
}

#[test]
fn cap_applies_to_custom_topology() {
    let topology = four_warehouses();
    let planner = Planner::new(&topology).with_options(SolveOptions {
        max_active_warehouses: 3,
        parallel: false,
    });
    let order = order(&[("p1", 1), ("p2", 1), ("p3", 1), ("p4", 1)]);

    assert_eq!(
        planner.compute_min_cost(&order),
        Err(RoutingError::TooManyWarehouses { active: 4, limit: 3 })
    );
}

#[test]
fn reference_products_are_unknown_elsewhere() {
    let topology = four_warehouses();

    assert_eq!(
        Planner::new(&topology).compute_min_cost(&order(&[("A", 1)])),
        Err(RoutingError::UnknownProduct("A".to_string()))
    );
}

#[test]
fn loads_topology_from_file() {
    let path = std::env::temp_dir().join(format!("delivery-planner-topology-{}.json", std::process::id()));
    std::fs::write(&path, FOUR_WAREHOUSES).unwrap();

    let config = TopologyConfig::from_path(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().warehouses.len(), 4);
}

#[test]
fn missing_file_is_io_error() {
    let result = TopologyConfig::from_path("/nonexistent/delivery-planner/topology.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn missing_hub_leg_is_rejected() {
    let json = FOUR_WAREHOUSES.replace(r#"{ "from": "W4", "to": "H", "distance": 4.0 },"#, "");
    let result = TopologyConfig::from_json_str(&json).and_then(|config| config.build());

    assert!(matches!(
        result,
        Err(ConfigError::MissingHubDistance { warehouse, .. }) if warehouse.as_str() == "W4"
    ));
}

#[test]
fn validation_errors_render_readably() {
    let mut config = TopologyConfig::default();
    config.products.get_mut("D").unwrap().weight = -2.0;

    let err = config.build().unwrap_err();
    assert_eq!(err.to_string(), "Product D has invalid unit weight -2");
}
