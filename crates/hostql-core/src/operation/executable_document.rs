use crate::operation::DocumentError;
use hostql_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Vec<DocumentError>>;

/// A parsed document that passed document-level validation: unique
/// operation and fragment names and no fragment cycles.
///
/// Spreads of undefined fragments are left for execution to report, as
/// field errors.
#[derive(Clone, Debug)]
pub struct ExecutableDocument {
    document: ast::Document,
    fragments: HashMap<String, usize>,
    operations: Vec<usize>,
}

impl ExecutableDocument {
    pub fn from_ast(document: ast::Document) -> Result<Self> {
        let mut errors = Vec::new();
        let mut operations = Vec::new();
        let mut fragments = HashMap::new();
        let mut operation_positions = HashMap::new();

        for (index, definition) in document.definitions.iter().enumerate() {
            match definition {
                ast::Definition::Operation(op) => {
                    if let Some(name) = &op.name {
                        if let Some(first_position) = operation_positions.get(name) {
                            errors.push(DocumentError::DuplicateOperationName {
                                name: name.clone(),
                                first_position: *first_position,
                                second_position: op.position,
                            });
                            continue;
                        }
                        operation_positions.insert(name.clone(), op.position);
                    }
                    operations.push(index);
                },
                ast::Definition::Fragment(frag) => {
                    if let Some(&first) = fragments.get(&frag.name) {
                        let first_position = match &document.definitions[first] {
                            ast::Definition::Fragment(first) => first.position,
                            ast::Definition::Operation(first) => first.position,
                        };
                        errors.push(DocumentError::DuplicateFragmentName {
                            fragment_name: frag.name.clone(),
                            first_position,
                            second_position: frag.position,
                        });
                        continue;
                    }
                    fragments.insert(frag.name.clone(), index);
                },
            }
        }

        if operations.len() > 1 {
            for &index in &operations {
                if let ast::Definition::Operation(op) = &document.definitions[index] {
                    if op.name.is_none() {
                        errors.push(DocumentError::AnonymousOperationNotAlone {
                            position: op.position,
                        });
                    }
                }
            }
        }

        let doc = Self {
            document,
            fragments,
            operations,
        };
        errors.extend(doc.validate_no_cycles());
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(doc)
    }

    pub fn document(&self) -> &ast::Document {
        &self.document
    }

    pub fn fragment(&self, name: &str) -> Option<&ast::FragmentDefinition> {
        match self.document.definitions.get(*self.fragments.get(name)?)? {
            ast::Definition::Fragment(frag) => Some(frag),
            ast::Definition::Operation(_) => None,
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = &ast::OperationDefinition> {
        self.operations
            .iter()
            .filter_map(|&index| match &self.document.definitions[index] {
                ast::Definition::Operation(op) => Some(op),
                ast::Definition::Fragment(_) => None,
            })
    }

    /// Picks the operation to execute.
    ///
    /// A document without operations yields `Ok(None)`. A single operation
    /// is chosen regardless of `name`. With several operations, `name` is
    /// required and must match one of them.
    pub fn select_operation(
        &self,
        name: Option<&str>,
    ) -> std::result::Result<Option<&ast::OperationDefinition>, DocumentError> {
        let mut operations = self.operations();
        let Some(first) = operations.next() else {
            return Ok(None);
        };
        if self.operations.len() == 1 {
            return Ok(Some(first));
        }

        let available = || {
            self.operations()
                .filter_map(|op| op.name.clone())
                .collect::<Vec<_>>()
        };
        let Some(name) = name.filter(|name| !name.is_empty()) else {
            return Err(DocumentError::OperationNameRequired {
                available: available(),
            });
        };
        self.operations()
            .find(|op| op.name.as_deref() == Some(name))
            .map(Some)
            .ok_or_else(|| DocumentError::UnknownOperation {
                name: name.to_string(),
                available: available(),
            })
    }

    /// Finds fragment spread cycles with a depth-first walk from every
    /// fragment. Each cycle is reported once, however many of its members
    /// the walk started from.
    fn validate_no_cycles(&self) -> Vec<DocumentError> {
        let mut all_cycles = Vec::new();
        let mut seen_normalized_cycles = HashSet::new();

        let mut names: Vec<&String> = self.fragments.keys().collect();
        names.sort();
        for fragment_name in names {
            let mut path = Vec::new();
            let mut visiting = HashSet::new();
            self.check_fragment_cycles(
                fragment_name,
                &mut path,
                &mut visiting,
                &mut all_cycles,
                &mut seen_normalized_cycles,
            );
        }
        all_cycles
    }

    fn check_fragment_cycles(
        &self,
        fragment_name: &str,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<DocumentError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        if visiting.contains(fragment_name) {
            let start = path
                .iter()
                .position(|name| name == fragment_name)
                .unwrap_or(0);
            let mut cycle = path[start..].to_vec();
            cycle.push(fragment_name.to_string());

            let normalized = normalize_cycle(&cycle);
            if seen_normalized.insert(normalized) {
                errors.push(DocumentError::FragmentCycle { cycle_path: cycle });
            }
            return;
        }

        // Undefined spreads are reported during execution.
        let Some(fragment) = self.fragment(fragment_name) else {
            return;
        };

        path.push(fragment_name.to_string());
        visiting.insert(fragment_name.to_string());
        self.check_selection_set_cycles(
            &fragment.selection_set,
            path,
            visiting,
            errors,
            seen_normalized,
        );
        path.pop();
        visiting.remove(fragment_name);
    }

    fn check_selection_set_cycles(
        &self,
        selection_set: &ast::SelectionSet,
        path: &mut Vec<String>,
        visiting: &mut HashSet<String>,
        errors: &mut Vec<DocumentError>,
        seen_normalized: &mut HashSet<Vec<String>>,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::FragmentSpread(spread) => self.check_fragment_cycles(
                    &spread.fragment_name,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),
                ast::Selection::InlineFragment(inline) => self.check_selection_set_cycles(
                    &inline.selection_set,
                    path,
                    visiting,
                    errors,
                    seen_normalized,
                ),
                ast::Selection::Field(field) => {
                    if let Some(nested) = &field.selection_set {
                        self.check_selection_set_cycles(
                            nested,
                            path,
                            visiting,
                            errors,
                            seen_normalized,
                        );
                    }
                },
            }
        }
    }
}

/// Rotates a closed cycle (`[A, B, C, A]`) to start at its smallest name
/// so rotations of the same cycle compare equal.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return Vec::new();
    }
    let open = &cycle[..cycle.len() - 1];
    let min_idx = open
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&open[min_idx..]);
    normalized.extend_from_slice(&open[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
