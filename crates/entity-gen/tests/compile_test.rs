//! Builds real `entity-gen` output against `entity-gen-support`.
//!
//! Two trees are generated: the regular fixture, and one whose classes, members and modules take
//! names of support and std types, keywords, and the reserved `enums` module.

use std::{
  fs,
  path::{Path, PathBuf},
  process::Command,
};

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn generate(input: &Path, output: &Path) {
  let result = Command::new(env!("CARGO_BIN_EXE_entity-gen"))
    .args(["--color", "never", "generate", "-q", "-i"])
    .arg(input)
    .arg("-o")
    .arg(output)
    .output()
    .expect("binary should run");
  assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));
}

const PROGRAM: &str = r#"
use std::sync::Arc;

use entity_gen_support::{AbstractEntity, Currency, Decimal, InMemoryOrganizationService, Uuid};

#[path = {FIXTURE}]
mod fixture;
#[path = {SHADOWING}]
mod shadowing;

fn main() {
  let service = Arc::new(InMemoryOrganizationService::new());

  let mut account = fixture::entity::account::Account::new();
  account.set_name(Some("Contoso".to_string()));
  account.set_revenue(Some(Currency(Decimal::new(250, 0))));
  account.set_statecode(Some(fixture::entity::enums::account::statecode::Inactive));
  assert_eq!(account.statecode(), Some(fixture::entity::enums::account::statecode::Inactive));
  service.insert(account.into_entity()).unwrap();

  let mut currency = shadowing::entity::transactioncurrency::Currency::with_id(Uuid::new_v4());
  currency.set_Money(Some(Currency(Decimal::new(5, 0))));
  currency.set_Option(Some(shadowing::entity::enums::transactioncurrency::Option::Custom));
  currency.set_isbase(Some(shadowing::entity::enums::transactioncurrency::isbase::Yes));
  assert_eq!(currency.amount(), Some(Currency(Decimal::new(5, 0))));
  assert_eq!(
    currency.currencytype(),
    Some(shadowing::entity::enums::transactioncurrency::currencytype::Custom)
  );
  assert_eq!(currency.Uuid(), Some(shadowing::entity::enums::transactioncurrency::Uuid::Yes));
  service.insert(currency.into_entity()).unwrap();

  let mut record = shadowing::entity::entity::Entity::new();
  record.set_name(Some("system".to_string()));
  let record: entity_gen_support::Entity = record.into();
  assert_eq!(record.logical_name(), "entity");

  let mut widget = shadowing::entity::mywidget::Option::new();
  widget.set_String(Some("gear".to_string()));
  assert_eq!(widget.r#type().as_deref(), Some("gear"));
  assert_eq!(widget.logical_name(), "my-widget");

  assert_eq!(shadowing::entity::enums_2::String::new().primary_name(), None);
  assert_eq!(shadowing::entity::r#type::r#type::default().logical_name(), "type");

  let crm = fixture::ServiceContext::new(service.clone());
  assert_eq!(crm.Accounts().fetch().unwrap().len(), 1);

  let context = shadowing::ServiceContext::new(service);
  assert_eq!(context.Currencies().fetch().unwrap().len(), 1);
  assert!(context.types().fetch().unwrap().is_empty());
  assert!(context.Optiones().take(0).fetch().unwrap().is_empty());
}
"#;

#[test]
fn test_generated_bindings_compile_and_run() {
  let dir = tempfile::tempdir().unwrap();
  let fixture_out = dir.path().join("fixture");
  let shadowing_out = dir.path().join("shadowing");
  generate(&fixture("metadata.json"), &fixture_out);
  generate(&fixture("shadowing.json"), &shadowing_out);

  assert!(shadowing_out.join("entity/enums_2.rs").is_file());
  assert!(shadowing_out.join("entity/mywidget.rs").is_file());
  assert!(shadowing_out.join("entity/type.rs").is_file());

  let program = PROGRAM
    .replace("{FIXTURE}", &format!("{:?}", fixture_out.join("mod.rs").display().to_string()))
    .replace("{SHADOWING}", &format!("{:?}", shadowing_out.join("mod.rs").display().to_string()));
  let main = dir.path().join("generated_bindings.rs");
  fs::write(&main, program).unwrap();

  let cases = trybuild::TestCases::new();
  cases.pass(&main);
}
