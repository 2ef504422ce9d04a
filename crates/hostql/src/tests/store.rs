use crate::ExecutionOptions;
use crate::HostType;
use crate::Reflect;
use crate::ScalarKind;
use crate::Schema;
use crate::SchemaBuilder;
use crate::Value;
use chrono::TimeZone;
use chrono::Utc;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Status {
    Open,
    Closed,
}

impl Reflect for Status {
    fn host_type() -> HostType {
        HostType::scalar::<Status>(ScalarKind::U8).named("Status")
    }

    fn to_value(&self) -> Value<'_> {
        Value::UInt(*self as u64)
    }

    fn into_value(self) -> Value<'static> {
        Value::UInt(self as u64)
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::UInt(0) | Value::Int(0) => Some(Status::Open),
            Value::UInt(1) | Value::Int(1) => Some(Status::Closed),
            _ => None,
        }
    }
}

pub(super) struct Foo {
    bar: String,
}

impl Reflect for Foo {
    fn host_type() -> HostType {
        HostType::object::<Foo>("Foo")
            .field("bar", |f: &Foo| &f.bar)
            .finish()
    }
}

#[derive(Clone)]
pub(super) struct Item {
    sku: u64,
    name: String,
    price: f64,
    status: Status,
    restocked: chrono::DateTime<Utc>,
}

impl Reflect for Item {
    fn host_type() -> HostType {
        HostType::object::<Item>("Item")
            .field("sku", |i: &Item| &i.sku)
            .tag(",id")
            .field("name", |i: &Item| &i.name)
            .field("price", |i: &Item| &i.price)
            .field("status", |i: &Item| &i.status)
            .field("restocked", |i: &Item| &i.restocked)
            .finish()
    }
}

#[derive(Default)]
pub(super) struct SkuArgs {
    sku: u64,
}

impl Reflect for SkuArgs {
    fn host_type() -> HostType {
        HostType::object::<SkuArgs>("SkuArgs")
            .input("sku", |a: &mut SkuArgs| &mut a.sku)
            .tag(",id")
            .constructible()
            .finish()
    }
}

pub(super) struct Store {
    a: Foo,
    items: Vec<Item>,
}

impl Store {
    fn resolve_item(&self, args: SkuArgs) -> Option<Item> {
        self.items.iter().find(|item| item.sku == args.sku).cloned()
    }
}

impl Reflect for Store {
    fn host_type() -> HostType {
        HostType::object::<Store>("Store")
            .field("a", |s: &Store| &s.a)
            .field("items", |s: &Store| &s.items)
            .resolver_with_args("resolve_item", Store::resolve_item)
            .finish()
    }
}

#[derive(Default)]
pub(super) struct IncrementArgs {
    by: i32,
}

impl Reflect for IncrementArgs {
    fn host_type() -> HostType {
        HostType::object::<IncrementArgs>("IncrementArgs")
            .input("by", |a: &mut IncrementArgs| &mut a.by)
            .constructible()
            .finish()
    }
}

#[derive(Default)]
pub(super) struct Counter {
    count: AtomicI32,
}

impl Counter {
    fn resolve_increment(&self, args: IncrementArgs) -> i32 {
        self.count.fetch_add(args.by, Ordering::SeqCst) + args.by
    }
}

impl Reflect for Counter {
    fn host_type() -> HostType {
        HostType::object::<Counter>("Counter")
            .resolver_with_args("resolve_increment", Counter::resolve_increment)
            .finish()
    }
}

pub(super) fn store() -> Store {
    let restocked = |day| Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0).single();
    Store {
        a: Foo {
            bar: "baz".to_string(),
        },
        items: vec![
            Item {
                sku: 100,
                name: "Kettle".to_string(),
                price: 24.5,
                status: Status::Open,
                restocked: restocked(1).unwrap_or_default(),
            },
            Item {
                sku: 200,
                name: "Teapot".to_string(),
                price: 1e21,
                status: Status::Closed,
                restocked: restocked(2).unwrap_or_default(),
            },
        ],
    }
}

pub(super) fn schema_with(options: ExecutionOptions) -> Schema {
    let mut builder = SchemaBuilder::new().with_execution_options(options);
    builder
        .register_enum([("OPEN", Status::Open), ("CLOSED", Status::Closed)])
        .expect("statuses register");
    builder
        .build(store(), Counter::default())
        .expect("store schema builds")
}

pub(super) fn schema() -> Schema {
    schema_with(ExecutionOptions::default())
}
