// End-to-end planning over text inputs: parse stock, extract demand, allocate, report.

use replen_picker::{
    allocate, build_report, extract_demand, logging, parse_stock_table, plan, PickTask,
};

const STOCK_CSV: &str = "\
\"Item Code\",\"Description\",\"From Location\",\"From Quantity\"
\"HX100\",\"Hex bolt\",\"B2.C4.S1\",\"6\"
\"HX100\",\"Hex bolt\",\"A1.C2.S3\",\"3\"
\"HX100\",\"Hex bolt\",\"OVERFLOW\",\"20\"
\"WS_20\",\"Washer\",\"A1.C2.S4\",\"50\"
\"NT_5\",\"Nut\",\"A1.C3.S1\",\"4\"
\"NT_5\",\"Nut\",\"A1.C1.S9\",\"2\"
\"BAD\",\"Broken row\",\"A1.C1.S1\",\"n/a\"
";

const ERROR_LOG: &str = "\
08:01 Pick failed for HX100 (x1)
08:02 Pick failed for WS_20 (x1)
08:03 Replen required for NT_5 (x3)
";

#[test]
fn test_full_walk_plan() {
    logging::init_test();

    let log = format!("{ERROR_LOG}08:10 Pick failed for HX100 (x10)\n08:11 Pick failed for GONE1 (x2)\n");
    let rows = plan(STOCK_CSV, &log).unwrap();

    let summary: Vec<(&str, u32, u32, bool)> = rows
        .iter()
        .map(|r| (r.sku.as_str(), r.required, r.available, r.sufficient))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("NT_5", 3, 6, true),
            ("HX100", 11, 29, true),
            ("WS_20", 1, 50, true),
            ("GONE1", 2, 0, false),
        ]
    );

    assert_eq!(rows[0].picks, vec!["A1.C1.S9 (2)", "A1.C3.S1 (1)"]);
    assert_eq!(rows[1].picks, vec!["A1.C2.S3 (3)", "B2.C4.S1 (6)", "OVERFLOW (2)"]);
    assert_eq!(rows[2].picks, vec!["A1.C2.S4"]);
    assert_eq!(rows[3].picks, vec!["—"]);
}

#[test]
fn test_shortfall_reported_after_real_picks() {
    let stock = "Item Code,From Location,From Quantity\nX,A1.C1.S1,2\nX,A2.C1.S1,4\n";
    let rows = plan(stock, "for X (x10)").unwrap();

    assert_eq!(rows.len(), 1);
    assert!(!rows[0].sufficient);
    assert_eq!(rows[0].available, 6);
    assert_eq!(
        rows[0].picks,
        vec!["A1.C1.S1 (2)", "A2.C1.S1 (4)", "❌ Shortfall: 4"]
    );
}

#[test]
fn test_plan_is_repeatable() {
    let stock = parse_stock_table(STOCK_CSV).unwrap();
    let demand = extract_demand(ERROR_LOG);

    let first = allocate(&demand, &stock);
    let second = allocate(&demand, &stock);
    assert_eq!(first, second);
    assert_eq!(
        build_report(&demand, &stock, &first),
        build_report(&demand, &stock, &second)
    );
}

#[test]
fn test_tasks_are_in_walk_order_and_grouping_is_stable() {
    let stock = parse_stock_table(STOCK_CSV).unwrap();
    let demand = extract_demand("for HX100 (x11)\nfor NT_5 (x6)\nfor WS_20 (x1)");
    let tasks = allocate(&demand, &stock);

    let walk: Vec<&str> = tasks.iter().map(|t| t.location.as_str()).collect();
    assert_eq!(
        walk,
        vec!["A1.C1.S9", "A1.C2.S3", "A1.C2.S4", "A1.C3.S1", "B2.C4.S1", "OVERFLOW"]
    );

    let hx: Vec<&PickTask> = tasks.iter().filter(|t| t.sku == "HX100").collect();
    let hx_locations: Vec<&str> = hx.iter().map(|t| t.location.as_str()).collect();
    assert_eq!(hx_locations, vec!["A1.C2.S3", "B2.C4.S1", "OVERFLOW"]);

    let rows = build_report(&demand, &stock, &tasks);
    let order: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(order, vec!["NT_5", "HX100", "WS_20"]);
}

#[test]
fn test_no_demand_means_no_rows() {
    let rows = plan(STOCK_CSV, "shift started\nall picks ok\n").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_empty_stock_marks_everything_short() {
    let rows = plan("", ERROR_LOG).unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| !r.sufficient && r.picks == vec!["—"]));
}

#[test]
fn test_markers_walk_before_named_locations() {
    let stock = "Item Code,From Location,From Quantity\nX,OVERFLOW,3\nY,BULK,1\n";
    let rows = plan(stock, "for X (x5)\nfor Y (x1)\nfor Z (x1)").unwrap();

    let order: Vec<&str> = rows.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(order, vec!["Z", "X", "Y"]);
    assert_eq!(rows[0].picks, vec!["—"]);
    assert_eq!(rows[1].picks, vec!["❌ Shortfall: 2", "OVERFLOW (3)"]);
    assert_eq!(rows[2].picks, vec!["BULK"]);
}

#[test]
fn test_empty_location_is_shown_on_the_walk() {
    let stock = "Item Code,From Location,From Quantity\nX,A1.C1.S1,0\nX,A1.C1.S2,5\n";
    let rows = plan(stock, "for X (x3)").unwrap();

    assert_eq!(rows[0].picks, vec!["A1.C1.S1", "A1.C1.S2 (3)"]);
    assert!(rows[0].sufficient);
}
