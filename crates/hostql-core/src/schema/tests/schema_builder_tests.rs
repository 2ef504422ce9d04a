use crate::Schema;
use crate::SchemaBuilder;
use crate::SchemaOptions;
use crate::directives::Directive;
use crate::directives::DirectiveLocation;
use crate::directives::DirectiveModifier;
use crate::host::HostType;
use crate::host::Invoker;
use crate::host::ObjectBuilder;
use crate::host::Reflect;
use crate::host::ResolverArgs;
use crate::host::ResolverError;
use crate::host::ScalarKind;
use crate::host::Signature;
use crate::host::Value;
use crate::schema::SchemaBuildError;
use crate::types::FieldAccessor;
use crate::types::InputKind;
use crate::types::MethodInput;
use crate::types::TypeNode;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

struct Empty;

impl Reflect for Empty {
    fn host_type() -> HostType {
        HostType::object::<Empty>("Empty").finish()
    }
}

fn build<Q: Reflect + Send + Sync>(query: Q) -> Result<Schema> {
    SchemaBuilder::new().build(query, Empty)
}

fn noop() -> Invoker {
    Arc::new(|_: &dyn Any, _: &mut ResolverArgs<'_>| Vec::new())
}

/// Builds a schema whose query root is a fresh unit struct described by
/// `$describe`.
macro_rules! build_root {
    ($root:ident, $describe:expr) => {{
        struct $root;
        impl Reflect for $root {
            fn host_type() -> HostType {
                let describe: fn(ObjectBuilder<$root>) -> ObjectBuilder<$root> = $describe;
                describe(HostType::object::<$root>(stringify!($root))).finish()
            }
        }
        build($root)
    }};
}

mod roots {
    use super::*;

    #[test]
    fn roots_must_be_structs() {
        assert!(matches!(
            SchemaBuilder::new().build(5i32, Empty),
            Err(SchemaBuildError::RootNotObject { root: "query", .. }),
        ));
        assert!(matches!(
            SchemaBuilder::new().build(Empty, "text".to_string()),
            Err(SchemaBuildError::RootNotObject { root: "mutation", .. }),
        ));
    }

    #[test]
    fn identical_roots_need_opting_in() -> Result<()> {
        assert_eq!(
            SchemaBuilder::new().build(Empty, Empty).err(),
            Some(SchemaBuildError::IdenticalRootTypes {
                type_name: "Empty".to_string(),
            }),
        );

        let schema = SchemaBuilder::new()
            .with_options(SchemaOptions {
                allow_identical_roots: true,
            })
            .build(Empty, Empty)?;
        assert_eq!(schema.query_type_name(), "Empty");
        assert_eq!(schema.mutation_type_name(), "Empty");
        Ok(())
    }
}

mod fields {
    use super::*;

    struct Audit {
        created_by: String,
        revision: u32,
    }

    impl Reflect for Audit {
        fn host_type() -> HostType {
            HostType::object::<Audit>("Audit")
                .field("created_by", |a: &Audit| &a.created_by)
                .field("revision", |a: &Audit| &a.revision)
                .finish()
        }
    }

    struct Profile {
        user_id: u64,
        display_name: String,
        password: String,
        nickname: Option<String>,
        audit: Audit,
        note: String,
    }

    impl Reflect for Profile {
        fn host_type() -> HostType {
            HostType::object::<Profile>("Profile")
                .field("user_id", |p: &Profile| &p.user_id)
                .tag(",id")
                .field("display_name", |p: &Profile| &p.display_name)
                .tag("name")
                .field("password", |p: &Profile| &p.password)
                .tag("-")
                .field("nickname", |p: &Profile| &p.nickname)
                .embedded("audit", |p: &Profile| &p.audit)
                .input("note", |p: &mut Profile| &mut p.note)
                .func_field("shout", |p: &Profile| p.display_name.to_uppercase())
                .resolver("resolve_URL", |_: &Profile| "https://example.com".to_string())
                .resolver("helper", |_: &Profile| 1i32)
                .finish()
        }
    }

    fn profile() -> Profile {
        Profile {
            user_id: 7,
            display_name: "Ada".to_string(),
            password: "secret".to_string(),
            nickname: None,
            audit: Audit {
                created_by: "admin".to_string(),
                revision: 3,
            },
            note: String::new(),
        }
    }

    #[test]
    fn field_names_follow_tags_and_host_names() -> Result<()> {
        let schema = build(profile())?;
        let object = schema.query_type().expect("query type registered");
        let names: Vec<_> = object.fields().keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["userId", "name", "nickname", "createdBy", "revision", "shout", "URL"],
        );
        Ok(())
    }

    #[test]
    fn ids_resolvers_and_promoted_fields() -> Result<()> {
        let schema = build(profile())?;
        let object = schema.query_type().expect("query type registered");

        let user_id = object.field("userId").expect("userId exists");
        assert!(user_id.is_id());
        assert!(matches!(
            user_id.node(),
            TypeNode::Scalar { kind: ScalarKind::U64, is_id: true },
        ));

        let created_by = object.field("createdBy").expect("promoted from Audit");
        assert!(matches!(created_by.accessor(), FieldAccessor::Data(chain) if chain.len() == 2));
        assert_eq!(created_by.host_name(), "created_by");

        assert!(object.field("shout").is_some_and(|field| field.is_resolver()));
        assert!(object.field("URL").is_some_and(|field| field.is_resolver()));
        assert!(object.field("helper").is_none());
        assert!(object.field("note").is_none());
        assert!(schema.registry().object("Audit").is_none());
        Ok(())
    }

    #[test]
    fn tag_errors_and_embedding_errors() {
        struct Tagged {
            ratio: f64,
        }
        impl Reflect for Tagged {
            fn host_type() -> HostType {
                HostType::object::<Tagged>("Tagged")
                    .field("ratio", |t: &Tagged| &t.ratio)
                    .tag(",id")
                    .finish()
            }
        }
        assert_eq!(
            build(Tagged { ratio: 1.0 }).err(),
            Some(SchemaBuildError::InvalidIdKind {
                type_name: "Tagged".to_string(),
                field_name: "ratio".to_string(),
                kind: "f64".to_string(),
            }),
        );

        struct Parent {
            child: Empty,
        }
        impl Reflect for Parent {
            fn host_type() -> HostType {
                HostType::object::<Parent>("Parent")
                    .field("child", |p: &Parent| &p.child)
                    .tag(",id")
                    .finish()
            }
        }
        assert!(matches!(
            build(Parent { child: Empty }),
            Err(SchemaBuildError::IdOnCompositeType { .. }),
        ));

        struct Flat {
            count: i32,
        }
        impl Reflect for Flat {
            fn host_type() -> HostType {
                HostType::object::<Flat>("Flat")
                    .embedded("count", |f: &Flat| &f.count)
                    .finish()
            }
        }
        assert!(matches!(
            build(Flat { count: 1 }),
            Err(SchemaBuildError::EmbeddedNotStruct { .. }),
        ));
    }

    #[test]
    fn unsupported_field_types() {
        struct Counts {
            counts: HashMap<String, i32>,
        }
        impl Reflect for Counts {
            fn host_type() -> HostType {
                HostType::object::<Counts>("Counts")
                    .field("counts", |c: &Counts| &c.counts)
                    .finish()
            }
        }
        assert!(matches!(
            build(Counts { counts: HashMap::new() }),
            Err(SchemaBuildError::UnsupportedType { location, kind, .. })
                if location == "Counts.counts" && kind == "map",
        ));
    }

    #[test]
    fn registered_enums_change_the_field_type() -> Result<()> {
        #[derive(Clone)]
        struct Level(String);
        impl Reflect for Level {
            fn host_type() -> HostType {
                HostType::scalar::<Level>(ScalarKind::String).named("Level")
            }
            fn to_value(&self) -> Value<'_> {
                Value::String(self.0.as_str().into())
            }
        }
        struct Settings {
            level: Level,
        }
        impl Reflect for Settings {
            fn host_type() -> HostType {
                HostType::object::<Settings>("Settings")
                    .field("level", |s: &Settings| &s.level)
                    .finish()
            }
        }
        let settings = || Settings {
            level: Level("high".to_string()),
        };

        let plain = build(settings())?;
        assert!(matches!(
            plain.query_type().and_then(|q| q.field("level")).map(|f| f.node()),
            Some(TypeNode::Scalar { kind: ScalarKind::String, .. }),
        ));

        let mut builder = SchemaBuilder::new();
        builder.register_enum([("HIGH", Level("high".to_string()))])?;
        let with_enum = builder.build(settings(), Empty)?;
        assert!(matches!(
            with_enum.query_type().and_then(|q| q.field("level")).map(|f| f.node()),
            Some(TypeNode::Enum(name)) if name == "Level",
        ));
        Ok(())
    }
}

mod naming {
    use super::*;

    struct Inner {
        value: i32,
    }

    impl Reflect for Inner {
        fn host_type() -> HostType {
            HostType::anonymous_object::<Inner>()
                .field("value", |i: &Inner| &i.value)
                .finish()
        }
    }

    struct First;
    struct Second;

    impl Reflect for First {
        fn host_type() -> HostType {
            HostType::object::<First>("Thing").finish()
        }
    }

    impl Reflect for Second {
        fn host_type() -> HostType {
            HostType::object::<Second>("Thing").finish()
        }
    }

    struct Things {
        inner: Inner,
        first: First,
        second: Second,
    }

    impl Reflect for Things {
        fn host_type() -> HostType {
            HostType::object::<Things>("Things")
                .field("inner", |t: &Things| &t.inner)
                .field("first", |t: &Things| &t.first)
                .field("second", |t: &Things| &t.second)
                .finish()
        }
    }

    fn things() -> Things {
        Things {
            inner: Inner { value: 1 },
            first: First,
            second: Second,
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        assert!(matches!(
            build(things()),
            Err(SchemaBuildError::DuplicateTypeName { type_name, .. }) if type_name == "Thing",
        ));
    }

    #[test]
    fn renames_resolve_conflicts() -> Result<()> {
        let mut builder = SchemaBuilder::new();
        builder.rename_type::<Second>("OtherThing")?;
        let schema = builder.build(things(), Empty)?;

        let registry = schema.registry();
        assert!(registry.object("Thing").is_some());
        assert!(registry.object("OtherThing").is_some());
        assert!(registry.object("__UnknownType1").is_some());
        Ok(())
    }

    #[test]
    fn invalid_renames() {
        let mut builder = SchemaBuilder::new();
        let reason = |result: Result<()>| match result {
            Err(SchemaBuildError::InvalidTypeRename { reason, .. }) => reason,
            other => panic!("expected a rename error, got {other:?}"),
        };
        assert_eq!(
            reason(builder.rename_type::<i32>("Number")),
            "only struct and interface types can be renamed",
        );
        assert_eq!(reason(builder.rename_type::<Inner>("Inner")), "only named types can be renamed");
        assert_eq!(
            reason(builder.rename_type::<First>("not valid")),
            "the new name is not a valid name",
        );
    }
}

mod resolvers {
    use super::*;

    #[test]
    fn output_shapes() {
        assert!(matches!(
            build_root!(Nothing, |b| b.method("resolve_nothing", Signature::new(), noop())),
            Err(SchemaBuildError::NoReturnValue { method, .. }) if method == "resolve_nothing",
        ));
        assert!(matches!(
            build_root!(Two, |b| {
                b.method("resolve_two", Signature::new().output::<i32>().output::<i32>(), noop())
            }),
            Err(SchemaBuildError::MultipleDataOutputs { .. }),
        ));
        assert!(matches!(
            build_root!(Errors, |b| {
                let signature = Signature::returning::<std::result::Result<i32, ResolverError>>()
                    .output::<ResolverError>();
                b.method("resolve_errors", signature, noop())
            }),
            Err(SchemaBuildError::MultipleErrorOutputs { .. }),
        ));
        assert!(matches!(
            build_root!(ErrorOnly, |b| {
                b.method("resolve_error_only", Signature::new().output::<ResolverError>(), noop())
            }),
            Err(SchemaBuildError::NoUsableOutput { .. }),
        ));
        assert!(matches!(
            build_root!(Many, |b| {
                b.method("resolve_many", Signature::returning::<i32>().variadic(), noop())
            }),
            Err(SchemaBuildError::VariadicResolver { type_name, .. }) if type_name == "Many",
        ));
    }

    #[test]
    fn inputs_must_be_context_or_bundles() {
        assert!(matches!(
            build_root!(ScalarInput, |b| {
                b.method("resolve_count", Signature::returning::<i32>().input::<i32>(), noop())
            }),
            Err(SchemaBuildError::InvalidResolverInput { input, .. }) if input == "i32",
        ));
    }

    #[test]
    fn methods_without_the_prefix_are_ignored() -> Result<()> {
        let schema = build_root!(Helpers, |b| {
            b.method("compute", Signature::returning::<i32>().input::<i32>(), noop())
                .method("resolve_", Signature::returning::<i32>(), noop())
        })?;
        assert!(schema.query_type().is_some_and(|q| q.fields().is_empty()));
        Ok(())
    }

    #[derive(Default)]
    struct Page {
        limit: u32,
    }

    impl Reflect for Page {
        fn host_type() -> HostType {
            HostType::object::<Page>("Page")
                .field_rw("limit", |p: &Page| &p.limit, |p: &mut Page| &mut p.limit)
                .constructible()
                .finish()
        }
    }

    #[derive(Default)]
    struct Window {
        limit: u32,
    }

    impl Reflect for Window {
        fn host_type() -> HostType {
            HostType::object::<Window>("Window")
                .input("limit", |w: &mut Window| &mut w.limit)
                .constructible()
                .finish()
        }
    }

    #[test]
    fn bundles_become_inputs() -> Result<()> {
        struct Feed {
            page: Page,
        }
        impl Reflect for Feed {
            fn host_type() -> HostType {
                HostType::object::<Feed>("Feed")
                    .field("page", |f: &Feed| &f.page)
                    .resolver_with_args("resolve_items", |_: &Feed, page: Page| page.limit)
                    .finish()
            }
        }
        let schema = build(Feed {
            page: Page::default(),
        })?;
        let registry = schema.registry();
        assert!(registry.object("Page").is_some());
        let input = registry.input("Page__input").expect("bundle registered as input");
        assert_eq!(
            input.field("limit").map(|field| field.kind()),
            Some(&InputKind::Scalar { kind: ScalarKind::U32, is_id: false }),
        );

        let items = schema.query_type().and_then(|q| q.field("items")).expect("items exists");
        let TypeNode::Method(method) = items.node() else {
            panic!("items should be a resolver");
        };
        assert_eq!(method.inputs(), [MethodInput::Bundle {
            input_type: "Page__input".to_string(),
        }]);
        assert!(method.arguments().contains_key("limit"));
        Ok(())
    }

    #[test]
    fn duplicate_arguments_across_bundles() {
        assert!(matches!(
            build_root!(Both, |b| {
                let signature = Signature::returning::<i32>().input::<Page>().input::<Window>();
                b.method("resolve_both", signature, noop())
            }),
            Err(SchemaBuildError::DuplicateArgument { argument, .. }) if argument == "limit",
        ));
    }

    #[test]
    fn bundles_must_be_constructible_and_assignable() {
        #[derive(Default)]
        struct Frozen {
            limit: u32,
        }
        impl Reflect for Frozen {
            fn host_type() -> HostType {
                HostType::object::<Frozen>("Frozen")
                    .field("limit", |f: &Frozen| &f.limit)
                    .constructible()
                    .finish()
            }
        }
        struct Unbuildable;
        impl Reflect for Unbuildable {
            fn host_type() -> HostType {
                HostType::object::<Unbuildable>("Unbuildable").finish()
            }
        }

        assert!(matches!(
            build_root!(UsesFrozen, |b| {
                b.method("resolve_frozen", Signature::returning::<i32>().input::<Frozen>(), noop())
            }),
            Err(SchemaBuildError::InputFieldNotAssignable { field_name, .. }) if field_name == "limit",
        ));
        assert!(matches!(
            build_root!(UsesUnbuildable, |b| {
                let signature = Signature::returning::<i32>().input::<Unbuildable>();
                b.method("resolve_unbuildable", signature, noop())
            }),
            Err(SchemaBuildError::InputNotConstructible { type_name }) if type_name == "Unbuildable",
        ));
    }
}

mod interfaces {
    use super::*;

    struct Circle;
    struct Blob;

    impl Reflect for Circle {
        fn host_type() -> HostType {
            HostType::object::<Circle>("Circle")
                .resolver("resolve_area", |_: &Circle| 3.14f64)
                .finish()
        }
    }

    impl Reflect for Blob {
        fn host_type() -> HostType {
            HostType::object::<Blob>("Blob")
                .method_signature("resolve_area", Signature::returning::<f64>())
                .finish()
        }
    }

    enum Shape {
        Circle(Circle),
    }

    impl Reflect for Shape {
        fn host_type() -> HostType {
            HostType::interface::<Shape>("Shape")
                .resolver::<f64>("resolve_area")
                .implemented_by::<Circle>()
                .finish()
        }

        fn to_value(&self) -> Value<'_> {
            match self {
                Shape::Circle(circle) => circle.to_value(),
            }
        }
    }

    struct Canvas {
        shape: Shape,
    }

    impl Reflect for Canvas {
        fn host_type() -> HostType {
            HostType::object::<Canvas>("Canvas")
                .field("shape", |c: &Canvas| &c.shape)
                .finish()
        }
    }

    #[test]
    fn implementations_are_linked() -> Result<()> {
        let schema = build(Canvas {
            shape: Shape::Circle(Circle),
        })?;
        let registry = schema.registry();
        let shape = registry.interface("Shape").expect("interface registered");
        assert_eq!(shape.implementations(), ["Circle"]);
        assert!(shape.field("area").is_some());
        assert!(registry.object("Circle").is_some_and(|circle| circle.implements("Shape")));
        Ok(())
    }

    /// Builds a schema whose query root has one field of a fresh interface
    /// type described by `$describe`.
    macro_rules! build_with_interface {
        ($describe:expr) => {{
            struct Loose;
            impl Reflect for Loose {
                fn host_type() -> HostType {
                    $describe
                }
            }
            struct Board {
                shape: Loose,
            }
            impl Reflect for Board {
                fn host_type() -> HostType {
                    HostType::object::<Board>("Board")
                        .field("shape", |b: &Board| &b.shape)
                        .finish()
                }
            }
            build(Board { shape: Loose })
        }};
    }

    #[test]
    fn interface_errors() {
        assert!(matches!(
            build_with_interface!(HostType::anonymous_interface::<Loose>()
                .implemented_by::<Circle>()
                .finish()),
            Err(SchemaBuildError::AnonymousInterface { .. }),
        ));
        assert_eq!(
            build_with_interface!(HostType::interface::<Loose>("Lonely").finish()).err(),
            Some(SchemaBuildError::InterfaceWithoutImplementations {
                interface: "Lonely".to_string(),
            }),
        );
        assert!(matches!(
            build_with_interface!(HostType::interface::<Loose>("Sized")
                .resolver::<u32>("resolve_size")
                .implemented_by::<Circle>()
                .finish()),
            Err(SchemaBuildError::InterfaceNotSatisfied { method, .. }) if method == "resolve_size",
        ));
        assert!(matches!(
            build_with_interface!(HostType::interface::<Loose>("Area")
                .resolver::<f64>("resolve_area")
                .implemented_by::<Blob>()
                .finish()),
            Err(SchemaBuildError::InvalidInterfaceImplementation { reason, .. })
                if reason == "its `area` resolver cannot be called",
        ));
    }
}

mod directives {
    use super::*;

    fn shout() -> Directive {
        Directive::new("shout", vec![DirectiveLocation::Field], |_| Ok(DirectiveModifier::Keep))
    }

    #[test]
    fn builtins_are_registered() -> Result<()> {
        let schema = SchemaBuilder::new()
            .with_options(SchemaOptions {
                allow_identical_roots: true,
            })
            .build(Empty, Empty)?;
        let names: Vec<_> = schema.directives().map(Directive::name).collect();
        assert_eq!(names, ["skip", "include"]);
        Ok(())
    }

    #[test]
    fn custom_directives() -> Result<()> {
        let mut builder = SchemaBuilder::new();
        builder.register_directive(shout())?;
        assert_eq!(
            builder.register_directive(shout()),
            Err(SchemaBuildError::DuplicateDirective {
                name: "shout".to_string(),
            }),
        );
        assert_eq!(
            builder.register_directive(Directive::new("no-dashes", vec![DirectiveLocation::Field], |_| {
                Ok(DirectiveModifier::Keep)
            })),
            Err(SchemaBuildError::InvalidDirectiveName {
                name: "no-dashes".to_string(),
            }),
        );
        assert_eq!(
            builder.register_directive(Directive::new("nowhere", Vec::new(), |_| {
                Ok(DirectiveModifier::Keep)
            })),
            Err(SchemaBuildError::DirectiveWithoutLocations {
                name: "nowhere".to_string(),
            }),
        );
        struct Query;
        impl Reflect for Query {
            fn host_type() -> HostType {
                HostType::object::<Query>("Query").finish()
            }
        }
        let schema = builder.build(Query, Empty)?;
        assert!(schema.directive("shout").is_some());
        Ok(())
    }
}
