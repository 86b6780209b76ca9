//! Load Module Tests
//!
//! Validates per-zone load share computation and zone attribution failures.

#[cfg(test)]
mod tests {
    use crate::error::AnalysisError;
    use crate::load::aggregator::{compute_zone_load_shares, compute_zone_load_shares_with};
    use crate::load::types::LoadByNode;
    use crate::ring::types::{Node, NodeId, RingSnapshot};
    use crate::ring::zones::{SnapshotZoneResolver, ZoneLabelParser};

    const TOLERANCE: f64 = 1e-6;

    fn loads(entries: &[(&str, u64)]) -> LoadByNode {
        entries
            .iter()
            .map(|(id, count)| (NodeId::from(*id), *count))
            .collect()
    }

    #[test]
    fn test_shares_grouped_by_zone() {
        let load = loads(&[
            ("ingester-zone-a-1", 100),
            ("ingester-zone-a-2", 300),
            ("ingester-zone-b-1", 50),
        ]);

        let tables = compute_zone_load_shares(&load).unwrap();
        assert_eq!(tables.len(), 2);

        let zone_a = &tables["zone-a"];
        assert_eq!(zone_a.zone_total(), 400);
        let share = zone_a.share(&NodeId::from("ingester-zone-a-1")).unwrap();
        assert!((share - 25.0).abs() < TOLERANCE);
        let share = zone_a.share(&NodeId::from("ingester-zone-a-2")).unwrap();
        assert!((share - 75.0).abs() < TOLERANCE);

        let zone_b = &tables["zone-b"];
        assert_eq!(zone_b.len(), 1);
        let share = zone_b.share(&NodeId::from("ingester-zone-b-1")).unwrap();
        assert!((share - 100.0).abs() < TOLERANCE);
        // Nodes of other zones are not part of this table.
        assert!(zone_b.share(&NodeId::from("ingester-zone-a-1")).is_none());
    }

    #[test]
    fn test_shares_sum_to_100_per_zone() {
        let load = loads(&[
            ("ingester-zone-a-1", 1_234_567),
            ("ingester-zone-a-2", 7),
            ("ingester-zone-a-3", 999_999),
            ("ingester-zone-b-1", 3),
            ("ingester-zone-b-2", 3),
            ("ingester-zone-b-3", 3),
        ]);

        for (zone, table) in compute_zone_load_shares(&load).unwrap() {
            let total: f64 = table.iter().map(|(_, share)| share).sum();
            assert!((total - 100.0).abs() < TOLERANCE, "zone {} total was {}", zone, total);
        }
    }

    #[test]
    fn test_zone_without_load_reports_zero_shares() {
        let load = loads(&[
            ("ingester-zone-a-1", 0),
            ("ingester-zone-a-2", 0),
            ("ingester-zone-b-1", 10),
        ]);

        let tables = compute_zone_load_shares(&load).unwrap();
        let zone_a = &tables["zone-a"];

        assert_eq!(zone_a.len(), 2);
        assert_eq!(zone_a.zone_total(), 0);
        assert!(zone_a.iter().all(|(_, share)| share == 0.0));
        assert_eq!(tables["zone-b"].share(&NodeId::from("ingester-zone-b-1")), Some(100.0));
    }

    #[test]
    fn test_malformed_identifier_aborts() {
        let load = loads(&[("ingester-zone-a-1", 10), ("bogus-7", 10)]);

        match compute_zone_load_shares(&load) {
            Err(AnalysisError::MalformedIdentifier { id }) => assert_eq!(id, "bogus-7"),
            other => panic!("expected MalformedIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_load_mapping() {
        let tables = compute_zone_load_shares(&LoadByNode::new()).unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_snapshot_zones_take_precedence() {
        // The snapshot places this node in zone-b even though its name says zone-a.
        let snapshot = RingSnapshot::from_nodes(vec![Node::new("ingester-zone-a-1", "zone-b", [1])])
            .unwrap();
        let parser = ZoneLabelParser::default();
        let resolver = SnapshotZoneResolver::new(&snapshot, &parser);

        let load = loads(&[("ingester-zone-a-1", 10), ("ingester-zone-b-2", 30)]);
        let tables = compute_zone_load_shares_with(&load, &resolver).unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables["zone-b"].zone_total(), 40);
        assert_eq!(tables["zone-b"].share(&NodeId::from("ingester-zone-a-1")), Some(25.0));
    }
}
