use crate::host::HostFieldKind;
use crate::host::HostKind;
use crate::host::HostType;
use crate::host::IsId;
use crate::host::Reflect;
use crate::host::ResolverArgs;
use crate::host::ResolverContext;
use crate::host::ResolverError;
use crate::host::ReturnSlot;
use crate::host::StructDecl;
use crate::host::Value;

#[derive(Default)]
struct Base {
    id: String,
}

impl Reflect for Base {
    fn host_type() -> HostType {
        HostType::object::<Base>("Base")
            .field("id", |b: &Base| &b.id)
            .tag(",id")
            .finish()
    }
}

#[derive(Default)]
struct Account {
    base: Base,
    balance: i64,
    secret: String,
}

impl Account {
    fn owner(&self) -> Result<String, ResolverError> {
        if self.balance < 0 {
            return Err(ResolverError::new("overdrawn"));
        }
        Ok("alice".to_string())
    }
}

impl Reflect for Account {
    fn host_type() -> HostType {
        HostType::object::<Account>("Account")
            .embedded("base", |a: &Account| &a.base)
            .field_rw("balance", |a: &Account| &a.balance, |a: &mut Account| &mut a.balance)
            .field("secret", |a: &Account| &a.secret)
            .tag("-")
            .resolver("resolve_owner", Account::owner)
            .resolver("resolve_key", |a: &Account| (a.base.id.clone(), IsId))
            .constructible()
            .finish()
    }
}

fn struct_decl(ty: &HostType) -> &StructDecl {
    match ty.kind() {
        HostKind::Struct(decl) => decl,
        other => panic!("expected a struct, got {}", other.describe()),
    }
}

#[test]
fn fields_keep_declaration_order_and_tags() {
    let ty = Account::host_type();
    let decl = struct_decl(&ty);
    let names: Vec<_> = decl.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["base", "balance", "secret"]);
    assert!(decl.fields()[0].is_embedded());
    assert_eq!(decl.fields()[1].tag(), None);
    assert_eq!(decl.fields()[2].tag(), Some("-"));
    assert!(decl.is_constructible());
}

#[test]
fn getters_and_setters_work_through_any() {
    let ty = Account::host_type();
    let decl = struct_decl(&ty);
    let HostFieldKind::Data { getter: Some(getter), setter: Some(setter), .. } =
        decl.fields()[1].kind()
    else {
        panic!("balance should be readable and writable");
    };

    let mut account = Account { balance: 10, ..Account::default() };
    assert!(matches!(getter(&account), Value::Int(10)));
    assert!(setter(&mut account, Value::Int(25)));
    assert_eq!(account.balance, 25);
    assert!(!setter(&mut account, Value::String("nope".into())));
    assert_eq!(account.balance, 25);
}

#[test]
fn resolvers_report_their_outputs() {
    let ty = Account::host_type();
    let decl = struct_decl(&ty);
    let owner = &decl.methods()[0];
    assert_eq!(owner.name(), "resolve_owner");
    assert_eq!(owner.signature().outputs().len(), 2);

    let context = ResolverContext::new();
    let overdrawn = Account { balance: -1, ..Account::default() };
    let invoker = owner.invoker.clone().unwrap();
    let slots = invoker(&overdrawn, &mut ResolverArgs::new(&context, Vec::new()));
    assert!(matches!(&slots[0], ReturnSlot::Data(Value::Null)));
    assert!(matches!(&slots[1], ReturnSlot::Error(Some(err)) if err.message() == "overdrawn"));

    let key = &decl.methods()[1];
    let outputs: Vec<_> = key.signature().outputs().iter().map(|ty| ty().kind().describe()).collect();
    assert_eq!(outputs, ["string", "id marker"]);
}

#[test]
fn constructor_builds_default_values() {
    let ty = Account::host_type();
    let construct = struct_decl(&ty).construct.unwrap();
    let built = construct();
    assert_eq!(built.downcast_ref::<Account>().map(|a| a.balance), Some(0));
}

enum Shape {
    Square(Square),
}

struct Square {
    side: f64,
}

impl Reflect for Square {
    fn host_type() -> HostType {
        HostType::object::<Square>("Square")
            .resolver("resolve_area", |s: &Square| s.side * s.side)
            .finish()
    }
}

impl Reflect for Shape {
    fn host_type() -> HostType {
        HostType::interface::<Shape>("Shape")
            .resolver::<f64>("resolve_area")
            .implemented_by::<Square>()
            .finish()
    }

    fn to_value(&self) -> Value<'_> {
        match self {
            Shape::Square(square) => square.to_value(),
        }
    }
}

#[test]
fn interfaces_list_methods_and_implementations() {
    let ty = Shape::host_type();
    let HostKind::Interface(decl) = ty.kind() else {
        panic!("expected an interface");
    };
    assert_eq!(decl.methods()[0].name(), "resolve_area");
    assert_eq!(decl.implementations().len(), 1);

    let square_ty = Square::host_type();
    let square_method = &struct_decl(&square_ty).methods()[0];
    assert!(decl.methods()[0].signature().matches(square_method.signature()));

    let shape = Shape::Square(Square { side: 2.0 });
    let any = shape.to_value();
    assert!(any.as_object().is_some_and(|obj| obj.is::<Square>()));
}
