// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketfin::app::FinanceApp;
use pocketfin::errors::{BackendError, FinanceError, ValidationError};
use pocketfin::format::Formatter;
use pocketfin::models::TransactionType;
use pocketfin::register::RegisterForm;
use pocketfin::storage::{KeyValueStore, MemoryKv, TRANSACTIONS_KEY, TransactionStore};
use std::cell::Cell;

/// Counts writes so tests can prove validation happens first.
#[derive(Default)]
struct CountingKv {
    inner: MemoryKv,
    writes: Cell<usize>,
}

impl KeyValueStore for CountingKv {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }
}

fn valid_form() -> RegisterForm {
    RegisterForm {
        name: "Almoço".into(),
        amount: "40.50".into(),
        kind: Some(TransactionType::Negative),
        category: Some("food".into()),
    }
}

fn app(kv: &CountingKv) -> FinanceApp<&CountingKv> {
    FinanceApp::new(TransactionStore::new(kv), Formatter::default())
}

#[test]
fn missing_type_is_rejected_before_any_write() {
    let kv = CountingKv::default();
    let form = RegisterForm {
        kind: None,
        ..valid_form()
    };
    let err = app(&kv).register_transaction(&form).unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Validation(ValidationError::MissingType)
    ));
    assert_eq!(kv.writes.get(), 0);
    assert!(kv.inner.raw(TRANSACTIONS_KEY).is_none());
}

#[test]
fn missing_category_is_rejected_before_any_write() {
    let kv = CountingKv::default();
    for category in [None, Some("".to_string()), Some("   ".to_string())] {
        let form = RegisterForm {
            category,
            ..valid_form()
        };
        let err = app(&kv).register_transaction(&form).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            FinanceError::Validation(ValidationError::MissingCategory)
        ));
    }
    assert_eq!(kv.writes.get(), 0);
}

#[test]
fn unknown_category_is_rejected() {
    let form = RegisterForm {
        category: Some("category".into()),
        ..valid_form()
    };
    assert_eq!(
        form.validate().unwrap_err(),
        ValidationError::UnknownCategory("category".into())
    );
}

#[test]
fn name_and_amount_are_checked() {
    let blank = RegisterForm {
        name: "  ".into(),
        ..valid_form()
    };
    assert_eq!(blank.validate().unwrap_err(), ValidationError::EmptyName);

    for amount in ["", "abc", "0", "-3", "1e"] {
        let form = RegisterForm {
            amount: amount.into(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidAmount(amount.into())
        );
    }
}

#[test]
fn valid_form_is_appended_with_id_and_timestamp() {
    let kv = CountingKv::default();
    let app = app(&kv);
    let first = app.register_transaction(&valid_form()).unwrap();
    let second = app
        .register_transaction(&RegisterForm {
            name: " Salário ".into(),
            amount: "3000".into(),
            kind: Some(TransactionType::Positive),
            category: Some("salary".into()),
        })
        .unwrap();

    assert_eq!(kv.writes.get(), 2);
    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());
    assert_eq!(first.amount, "40.50");
    assert_eq!(second.name, "Salário");

    let stored = app.store().load_all().unwrap();
    assert_eq!(stored, vec![first, second]);

    let dashboard = app.load_transactions().unwrap();
    assert_eq!(dashboard.highlights.entries.amount_formatted, "R$ 3.000,00");
    assert_eq!(dashboard.highlights.expenses.amount_formatted, "R$ 40,50");
    assert_eq!(dashboard.highlights.total.amount_formatted, "R$ 2.959,50");
}

#[test]
fn write_failure_is_reported_as_storage_error() {
    struct BrokenKv;
    impl KeyValueStore for BrokenKv {
        fn get(&self, _key: &str) -> Result<Option<String>, BackendError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), BackendError> {
            Err("read-only filesystem".into())
        }
    }

    let app = FinanceApp::new(TransactionStore::new(BrokenKv), Formatter::default());
    let err = app.register_transaction(&valid_form()).unwrap_err();
    assert!(matches!(err, FinanceError::StorageWrite { .. }));
    assert!(err.to_string().contains("read-only filesystem"));
}
