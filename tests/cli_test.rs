mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.arg("tests/fixtures/orders.json")
        .arg("tests/fixtures/paymentmethods.json");

    cmd.assert()
        .success()
        .stdout("PUNKTY 50.00\nmZysk 90.00\nBosBankrut 40.00\n");

    Ok(())
}

#[test]
fn test_cli_reports_unpaid_orders() {
    let orders = common::write_json(
        r#"[
            {"id": "ORDER1", "value": "150.00", "promotions": ["mZysk"]},
            {"id": "ORDER2", "value": "200.00", "promotions": ["BosBankrut"]},
            {"id": "ORDER3", "value": "150.00", "promotions": ["mZysk", "BosBankrut"]},
            {"id": "ORDER4", "value": "50.00"}
        ]"#,
    );
    let methods = common::write_json(
        r#"[
            {"id": "PUNKTY", "discount": "15", "limit": "100.00"},
            {"id": "mZysk", "discount": "10", "limit": "180.00"},
            {"id": "BosBankrut", "discount": "5", "limit": "200.00"}
        ]"#,
    );

    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.arg(orders.path()).arg(methods.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Allocation failed"))
        .stderr(predicate::str::contains("ORDER3"));
}

#[test]
fn test_cli_custom_points_id() {
    let orders = common::write_json(r#"[{"id": "ORDER1", "value": 100}]"#);
    let methods = common::write_json(
        r#"[
            {"id": "LOYALTY", "discount": 20, "limit": 100},
            {"id": "CardA", "discount": 0, "limit": 100}
        ]"#,
    );

    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.arg(orders.path())
        .arg(methods.path())
        .arg("--points-id")
        .arg("LOYALTY");

    cmd.assert().success().stdout("LOYALTY 80.00\n");
}

#[test]
fn test_cli_warns_when_points_missing() {
    let orders = common::write_json(r#"[{"id": "ORDER1", "value": "100.00"}]"#);
    let methods = common::write_json(r#"[{"id": "CardA", "discount": 0, "limit": "100.00"}]"#);

    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.env_remove("RUST_LOG").arg(orders.path()).arg(methods.path());

    cmd.assert()
        .success()
        .stdout("CardA 100.00\n")
        .stderr(predicate::str::contains("Points payment method not found"));
}

#[test]
fn test_cli_log_level_flag() {
    let orders = common::write_json(r#"[{"id": "ORDER1", "value": "100.00"}]"#);
    let methods = common::write_json(r#"[{"id": "CardA", "discount": 0, "limit": "100.00"}]"#);

    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.env_remove("RUST_LOG")
        .arg(orders.path())
        .arg(methods.path())
        .arg("--log-level")
        .arg("info");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Payment allocation complete"));
}

#[test]
fn test_cli_requires_both_paths() {
    let mut cmd = Command::new(cargo_bin!("payment-allocator"));
    cmd.arg("tests/fixtures/orders.json");

    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}
