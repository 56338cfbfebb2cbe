use super::*;
use std::collections::BTreeSet;
use std::str::FromStr;

#[test]
fn test_typed_id_creation() {
    let id = LineId::new("line-1");
    assert_eq!(id.as_str(), "line-1");
}

#[test]
fn test_typed_id_from_string() {
    let id = ProductId::from("p-42".to_string());
    assert_eq!(id.into_inner(), "p-42");
}

#[test]
fn test_typed_id_display() {
    let id = CostCenterId::new("cc-rent");
    assert_eq!(format!("{}", id), "cc-rent");
}

#[test]
fn test_typed_id_from_str() {
    let id = EmployeeId::from_str("sup-7").unwrap();
    assert_eq!(id, EmployeeId::new("sup-7"));
}

#[test]
fn test_typed_id_ordering() {
    let ids: BTreeSet<LineId> = ["L3", "L1", "L2"].into_iter().map(LineId::from).collect();
    let ordered: Vec<&str> = ids.iter().map(LineId::as_str).collect();
    assert_eq!(ordered, vec!["L1", "L2", "L3"]);
}

#[test]
fn test_typed_id_serde_transparent() {
    let id = ReportId::new("r-1");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"r-1\"");
    let back: ReportId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
