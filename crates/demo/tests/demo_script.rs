//! Black-box checks of the scripted walkthrough.

use stockbook_core::DomainError;
use stockbook_demo::run;
use stockbook_inventory::InventoryService;

const TRANSCRIPT: &str = "\
AddItem(Amul, Milk, 100)
AddItem(Amul, Curd, 50)
AddItem(Nestle, Milk, 60)
AddItem(Nestle, Curd, 90)
AddInventory(Amul, Milk, 10)
AddInventory(Nestle, Milk, 5)
AddInventory(Nestle, Curd, 10)
AddInventory(Amul, Milk, 10)
AddInventory(Amul, Curd, 5)

Inventory:
Amul -> Curd -> 5
Amul -> Milk -> 20
Nestle -> Curd -> 10
Nestle -> Milk -> 5

Search by brand = Nestle:
Nestle, Milk, 5
Nestle, Curd, 10

Search by category = Milk:
Nestle, Milk, 5
Amul, Milk, 20

Search by category = Milk, Order by price desc:
Amul, Milk, 20
Nestle, Milk, 5

Search by price = [70, 100]:
Nestle, Curd, 10
Amul, Milk, 20

Search by category = Milk and price range [70, 100], Order by price desc:
Amul, Milk, 20
";

fn run_script(service: &mut InventoryService) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = run(service, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn full_script_transcript() {
    let mut service = InventoryService::new();
    let (result, text) = run_script(&mut service);

    result.unwrap();
    assert_eq!(text, TRANSCRIPT);
    assert_eq!(service.len(), 4);
}

#[test]
fn script_aborts_on_first_failure() {
    let mut service = InventoryService::new();
    service.add_item("amul", "curd", 1).unwrap();

    let (result, text) = run_script(&mut service);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Item already exists: Amul, Curd");
    assert!(matches!(
        err.downcast_ref::<DomainError>(),
        Some(DomainError::AlreadyExists(_))
    ));

    // Only the call before the failure was echoed and applied.
    assert_eq!(text, "AddItem(Amul, Milk, 100)\n");
    assert_eq!(service.len(), 2);
    assert_eq!(service.get("Amul", "Milk").unwrap().quantity(), 0);
    assert_eq!(service.get("Amul", "Curd").unwrap().price(), 1);
}

#[test]
fn rerunning_on_a_populated_store_fails_immediately() {
    let mut service = InventoryService::new();
    run_script(&mut service).0.unwrap();

    let (result, text) = run_script(&mut service);
    assert!(result.is_err());
    assert!(text.is_empty());
    assert_eq!(service.get("Amul", "Milk").unwrap().quantity(), 20);
}
