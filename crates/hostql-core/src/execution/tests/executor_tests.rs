use crate::ExecutionOptions;
use crate::Executor;
use crate::Request;
use crate::Response;
use crate::Schema;
use crate::execution::PathSegment;
use crate::execution::tests::library;
use crate::execution::tests::library::Viewer;
use rayon::prelude::*;

fn run(schema: &Schema, query: &str) -> Response {
    schema.execute(&Request::new(query))
}

fn messages(response: &Response) -> Vec<&str> {
    response.errors().iter().map(|err| err.message.as_str()).collect()
}

fn field(name: &str) -> PathSegment {
    PathSegment::Field(name.to_string())
}

mod selection {
    use super::*;

    #[test]
    fn scalars_lists_ids_enums_and_times() {
        let response = run(
            &library::schema(),
            "{ books { id title genre rating tags created } }",
        );
        assert_eq!(
            response.data(),
            concat!(
                r#"{"books":[{"id":"1","title":"Dune","genre":"FICTION","rating":4.5,"#,
                r#""tags":["classic","desert"],"created":"2020-01-01T00:00:00Z"},"#,
                r#"{"id":"2","title":"Cosmos","genre":"SCIENCE","rating":null,"#,
                r#""tags":["space"],"created":"2021-06-15T00:00:00Z"}]}"#,
            ),
        );
        assert!(response.is_ok());
    }

    #[test]
    fn aliases_and_missing_results() {
        let response = run(
            &library::schema(),
            "{ first: book(id: 1) { title } missing: book(id: 9) { title } }",
        );
        assert_eq!(response.data(), r#"{"first":{"title":"Dune"},"missing":null}"#);
        assert!(response.is_ok());
    }

    #[test]
    fn recursive_optional_objects() {
        let response = run(
            &library::schema(),
            "{ chain { depth next { depth next { depth next { depth } } } } }",
        );
        assert_eq!(
            response.data(),
            r#"{"chain":{"depth":1,"next":{"depth":2,"next":{"depth":3,"next":null}}}}"#,
        );
    }

    #[test]
    fn typename_names_the_concrete_type() {
        let response = run(&library::schema(), "{ __typename featured { __typename kind } }");
        assert_eq!(
            response.data(),
            r#"{"__typename":"Library","featured":{"__typename":"Podcast","kind":"podcast"}}"#,
        );
    }

    #[test]
    fn excluded_fields_do_not_exist() {
        let response = run(&library::schema(), "{ secret }");
        assert_eq!(response.data(), r#"{"secret":null}"#);
        assert_eq!(
            messages(&response),
            ["field `secret` does not exist on type `Library`"],
        );
        assert_eq!(response.errors()[0].path, [field("secret")]);
    }

    #[test]
    fn mutations_use_the_mutation_root() {
        let response = run(&library::schema(), r#"mutation { stamp(note: "hi") }"#);
        assert_eq!(response.data(), r#"{"stamp":"stamped: hi"}"#);
    }

    #[test]
    fn resolvers_read_the_context() {
        let schema = library::schema();
        let request = Request::new("query Welcome { greeting }")
            .context_value(Viewer("ada".to_string()));
        assert_eq!(
            schema.execute(&request).data(),
            r#"{"greeting":"hello ada from Welcome"}"#,
        );
        assert_eq!(
            run(&schema, "{ greeting }").data(),
            r#"{"greeting":"hello stranger from anonymous"}"#,
        );
    }
}

mod fragments {
    use super::*;

    #[test]
    fn interface_values_narrow_by_type_condition() {
        let response = run(
            &library::schema(),
            "{ media { kind ... on Book { title } ... on Podcast { minutes } } }",
        );
        assert_eq!(
            response.data(),
            r#"{"media":[{"kind":"book","title":"Dune"},{"kind":"podcast","minutes":42}]}"#,
        );
        assert!(response.is_ok());
    }

    #[test]
    fn named_fragments_splice_into_the_parent() {
        let response = run(
            &library::schema(),
            "{ book(id: 2) { ...Basics ...OnMedia } }
             fragment Basics on Book { id title }
             fragment OnMedia on Media { kind }",
        );
        assert_eq!(
            response.data(),
            r#"{"book":{"id":"2","title":"Cosmos","kind":"book"}}"#,
        );
    }

    #[test]
    fn non_matching_conditions_contribute_nothing() {
        let response = run(
            &library::schema(),
            "{ featured { kind ... on Book { title } ... on Nowhere { title } } }",
        );
        assert_eq!(response.data(), r#"{"featured":{"kind":"podcast"}}"#);
        assert!(response.is_ok());
    }

    #[test]
    fn interface_scope_hides_implementation_fields() {
        let response = run(&library::schema(), "{ featured { minutes } }");
        assert_eq!(response.data(), r#"{"featured":{"minutes":null}}"#);
        assert_eq!(
            messages(&response),
            ["field `minutes` does not exist on type `Media`"],
        );
        assert_eq!(response.errors()[0].path, [field("featured"), field("minutes")]);
    }

    #[test]
    fn unknown_fragments_are_field_errors() {
        let response = run(&library::schema(), "{ small(value: 1) ...Missing }");
        assert_eq!(response.data(), r#"{"small":1}"#);
        assert_eq!(messages(&response), ["unknown fragment `Missing`"]);
    }
}

mod directives {
    use super::*;

    #[test]
    fn skip_and_include() {
        let response = run(
            &library::schema(),
            "{ a: small(value: 1)
               b: small(value: 2) @skip(if: true)
               c: small(value: 3) @include(if: false)
               d: small(value: 4) @include(if: true) @skip(if: false) }",
        );
        assert_eq!(response.data(), r#"{"a":1,"d":4}"#);
        assert!(response.is_ok());
    }

    #[test]
    fn skipped_fragments_write_nothing() {
        let response = run(
            &library::schema(),
            "{ small(value: 1) ... @skip(if: true) { other: small(value: 2) } }",
        );
        assert_eq!(response.data(), r#"{"small":1}"#);
    }

    #[test]
    fn unknown_directives_are_ignored_with_an_error() {
        let response = run(&library::schema(), "{ small(value: 1) @shout }");
        assert_eq!(response.data(), r#"{"small":1}"#);
        assert_eq!(messages(&response), ["unknown directive `@shout`"]);
        assert!(response.errors()[0].path.is_empty());
    }

    #[test]
    fn directives_on_the_wrong_location() {
        let response = run(&library::schema(), "query @skip(if: true) { small(value: 1) }");
        assert_eq!(response.data(), r#"{"small":1}"#);
        assert_eq!(
            messages(&response),
            ["directive `@skip` may not be used on QUERY"],
        );
    }

    #[test]
    fn invalid_directive_arguments() {
        let response = run(&library::schema(), "{ small(value: 1) @skip(if: 1) }");
        assert_eq!(response.data(), r#"{"small":1}"#);
        assert_eq!(
            messages(&response),
            ["directive `@skip`: argument `if` must be a boolean, found int"],
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn resolver_errors_null_only_their_field() {
        let response = run(
            &library::schema(),
            "{ book(id: 1) { short: excerpt(length: 2) broken: excerpt(length: 0) } }",
        );
        assert_eq!(response.data(), r#"{"book":{"short":"Du","broken":null}}"#);
        assert_eq!(messages(&response), ["length must be positive"]);
        assert_eq!(response.errors()[0].path, [field("book"), field("broken")]);
    }

    #[test]
    fn resolver_data_is_kept_alongside_its_error() {
        let response = run(&library::schema(), "{ partial }");
        assert_eq!(response.data(), r#"{"partial":"partial data"}"#);
        assert_eq!(messages(&response), ["partial failure"]);
    }

    #[test]
    fn resolver_errors_can_null_the_field() {
        let schema = library::schema_with(ExecutionOptions {
            resolver_error_nulls_field: true,
            ..ExecutionOptions::default()
        });
        let response = run(&schema, "{ partial }");
        assert_eq!(response.data(), r#"{"partial":null}"#);
        assert_eq!(messages(&response), ["partial failure"]);
    }

    #[test]
    fn list_elements_fail_independently() {
        let response = run(&library::schema(), "{ scores }");
        assert_eq!(response.data(), r#"{"scores":[1.5,null,2]}"#);
        assert_eq!(response.errors().len(), 1);
        assert_eq!(
            response.errors()[0].path,
            [field("scores"), PathSegment::Index(1)],
        );
    }

    #[test]
    fn leaf_and_composite_selection_rules() {
        let response = run(&library::schema(), "{ small(value: 1) { x } featured }");
        assert_eq!(response.data(), r#"{"small":null,"featured":null}"#);
        assert_eq!(
            messages(&response),
            [
                "field `small` has no fields to select; remove its selection set",
                "field `featured` of type `Media` must have a selection set",
            ],
        );
    }

    #[test]
    fn depth_guard() {
        let schema = library::schema_with(ExecutionOptions {
            max_depth: 2,
            ..ExecutionOptions::default()
        });
        let response = run(&schema, "{ chain { depth next { depth next { depth } } } }");
        assert_eq!(response.data(), r#"{"chain":{"depth":1,"next":null}}"#);
        assert_eq!(
            messages(&response),
            ["selection depth exceeds the maximum of 2"],
        );
        assert_eq!(response.errors()[0].path, [field("chain"), field("next")]);
    }

    #[test]
    fn default_depth_guard_nulls_instead_of_failing_the_request() {
        let max_depth = ExecutionOptions::default().max_depth;
        let levels = max_depth + 20;
        let query = format!(
            "{{ chain {{ {}depth{} }} }}",
            "onward { ".repeat(levels),
            " }".repeat(levels),
        );

        // Deep recursion on both the parse and execution side.
        let response = std::thread::Builder::new()
            .stack_size(32 * 1024 * 1024)
            .spawn(move || run(&library::schema(), &query))
            .expect("thread spawns")
            .join()
            .expect("execution finishes");

        assert_eq!(
            messages(&response),
            [format!("selection depth exceeds the maximum of {max_depth}")],
        );
        let path = &response.errors()[0].path;
        assert_eq!(path.len(), max_depth);
        assert_eq!(path[0], field("chain"));
        assert!(path[1..].iter().all(|segment| *segment == field("onward")));

        let data = response.data();
        let cutoff = format!(r#""onward":null{}"#, "}".repeat(max_depth));
        assert!(data.starts_with(r#"{"chain":{"onward":{"onward":"#), "{data}");
        assert!(data.ends_with(&cutoff), "{data}");
        assert_eq!(data.matches(r#""onward""#).count(), max_depth - 1);
    }
}

mod operations {
    use super::*;

    #[test]
    fn named_operation_is_selected() {
        let schema = library::schema();
        let query = "query A { small(value: 1) } query B { small(value: 2) }";
        let response = schema.execute(&Request::new(query).operation_name("B"));
        assert_eq!(response.data(), r#"{"small":2}"#);
    }

    #[test]
    fn several_operations_need_a_name() {
        let response = run(
            &library::schema(),
            "query A { small(value: 1) } query B { small(value: 2) }",
        );
        assert_eq!(response.data(), "null");
        assert_eq!(
            messages(&response),
            ["the document contains several operations; choose one of: A, B"],
        );
    }

    #[test]
    fn documents_without_operations_yield_empty_data() {
        let response = run(&library::schema(), "fragment F on Library { small(value: 1) }");
        assert_eq!(response.data(), "{}");
        assert!(response.is_ok());
    }

    #[test]
    fn subscriptions_are_rejected() {
        let response = run(&library::schema(), "subscription { small(value: 1) }");
        assert_eq!(response.data(), "null");
        assert_eq!(messages(&response), ["subscriptions are not supported"]);
    }

    #[test]
    fn parse_errors_fail_the_request() {
        let response = run(&library::schema(), "{ small(");
        assert_eq!(response.data(), "null");
        assert!(!response.errors().is_empty());
        assert!(response.errors().iter().all(|err| !err.locations.is_empty()));
    }

    #[test]
    fn document_errors_fail_the_request() {
        let response = run(
            &library::schema(),
            "{ ...A } fragment A on Library { ...A }",
        );
        assert_eq!(response.data(), "null");
        assert_eq!(messages(&response), ["Fragment cycle detected: A → A"]);
    }
}

mod reuse {
    use super::*;

    #[test]
    fn executors_reset_between_requests() {
        let schema = library::schema();
        let mut executor = Executor::new(&schema);

        let first = executor.execute(&Request::new("{ secret }")).into_response();
        assert_eq!(first.errors().len(), 1);

        let second = executor.execute(&Request::new("{ small(value: 5) }"));
        assert_eq!(second.data(), r#"{"small":5}"#);
        assert!(second.errors().is_empty());
    }

    #[test]
    fn one_schema_serves_many_threads() {
        let schema = library::schema();
        let responses: Vec<String> = (0..64)
            .into_par_iter()
            .map(|i| {
                let mut executor = Executor::new(&schema);
                let query = format!("{{ small(value: {}) book(id: 1) {{ title }} }}", i % 100);
                executor.execute(&Request::new(query)).to_json()
            })
            .collect();

        for (i, response) in responses.iter().enumerate() {
            assert_eq!(
                response,
                &format!(
                    r#"{{"data":{{"small":{},"book":{{"title":"Dune"}}}},"errors":[],"extensions":{{}}}}"#,
                    i % 100,
                ),
            );
        }
    }
}
